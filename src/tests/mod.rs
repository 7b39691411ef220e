mod scanner_test;
