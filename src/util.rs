pub fn error(column: usize, message: &str) {
    println!("column {}: Error: {}", column, message);
}
