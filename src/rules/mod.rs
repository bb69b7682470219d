mod formatter;

pub use formatter::RuleFormatter;
