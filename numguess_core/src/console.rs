use log::trace;
use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::Error;

/// Line oriented operator I/O.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<(), Error>;
    /// Reads one line without its terminator. `None` once the input is closed.
    fn read_line(&mut self) -> Result<Option<String>, Error>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        (**self).write_line(line)
    }

    fn read_line(&mut self) -> Result<Option<String>, Error> {
        (**self).read_line()
    }
}

pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl StreamConsole<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, Error> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become replacement characters, never an I/O error.
        let buf = String::from_utf8_lossy(&bytes);
        let line = buf.trim_end_matches(|c| c == '\n' || c == '\r');
        trace!("Read line {:?}", line);
        Ok(Some(line.to_owned()))
    }
}

/// Console fed from a fixed list of input lines that records everything written to it.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.output.push(line.to_owned());
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, Error> {
        Ok(self.input.pop_front())
    }
}
