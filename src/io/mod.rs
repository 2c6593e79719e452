//! Input/output abstractions
//!
//! Provides traits for input and output operations, enabling testing
//! by allowing mock implementations.

use std::io::{self, BufRead, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user.
    ///
    /// Returns an error if the underlying source fails or reaches
    /// end-of-input before a line is available.
    fn read_line(&mut self) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self) -> Result<String, io::Error> {
        // Prompts are written without a trailing newline, so flush
        // before blocking on the read.
        io::stdout().flush()?;
        let mut input = String::new();
        let bytes = io::stdin().lock().read_line(&mut input)?;
        if bytes == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
