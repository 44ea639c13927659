mod formatter;

pub use formatter::ResultFormatter;
