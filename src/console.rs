mod console_printer;

pub use console_printer::{ConsolePrinter, OutputFormat};
