use fnv::FnvHashMap;

// An assignment of truth values to variables.  The enumerator produces
// bindings that are total over the collected variable list; partial bindings
// only arise from direct use, and evaluation reports them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Binding {
    values: FnvHashMap<char, bool>,
}

impl Binding {
    pub fn new() -> Binding {
        Default::default()
    }

    pub fn define(&mut self, name: char, value: bool) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: char) -> Option<bool> {
        self.values.get(&name).copied()
    }
}

// All 2^N bindings for the given variables, in table order: row r assigns
// the variable at position i the bit (r >> (N-1-i)) & 1, so the last
// variable toggles fastest, counting from all-false up to all-true.
//
// Output size is exponential in vars.len(); callers are expected to keep
// the variable count small (the command line front end caps it).
pub fn enumerate_bindings(vars: &[char]) -> Vec<Binding> {
    assert!(vars.len() < usize::BITS as usize,
            "enumerate_bindings: too many variables: {}", vars.len());
    let row_count = 1usize << vars.len();

    (0..row_count).map(|row| binding_for_row(vars, row)).collect()
}

fn binding_for_row(vars: &[char], row: usize) -> Binding {
    let mut binding = Binding::new();
    for (position, name) in vars.iter().enumerate() {
        let bit = vars.len() - 1 - position;
        binding.define(*name, (row >> bit) & 1 == 1);
    }

    binding
}
