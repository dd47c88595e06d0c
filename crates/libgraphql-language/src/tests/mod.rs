mod printer_tests;
mod source_tests;
mod split_lines_tests;
mod utils;
mod visit_tests;
