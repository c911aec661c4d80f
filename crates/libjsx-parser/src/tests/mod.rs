mod jsx_parser_attribute_tests;
mod jsx_parser_children_tests;
mod parser_core_tests;
mod utils;
