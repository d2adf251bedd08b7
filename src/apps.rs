use regex::Regex;

use crate::error::Result;
use crate::input::InputSource;
use crate::worker::Worker;

/// Counts line separators in its input; reduction is plain addition, so
/// the folded total is independent of enumeration order.
#[derive(Debug)]
pub struct LineCountWorker<I> {
    input: I,
    result: Option<usize>,
}

impl<I: InputSource> Worker for LineCountWorker<I> {
    type Source = I;
    type Output = usize;

    fn bind(input: I) -> Self {
        Self {
            input,
            result: None,
        }
    }

    fn map(&mut self) -> Result<()> {
        let contents = self.input.read()?;
        self.result = Some(contents.matches('\n').count());
        Ok(())
    }

    fn reduce(&mut self, other: &Self) {
        self.result = Some(self.result.unwrap_or(0) + other.result.unwrap_or(0));
    }

    fn result(&self) -> Option<&usize> {
        self.result.as_ref()
    }

    fn into_result(self) -> Option<usize> {
        self.result
    }
}

/// Counts word occurrences in its input; reduction is plain addition.
pub struct WordCountWorker<I> {
    input: I,
    result: Option<usize>,
}

impl<I: InputSource> Worker for WordCountWorker<I> {
    type Source = I;
    type Output = usize;

    fn bind(input: I) -> Self {
        Self {
            input,
            result: None,
        }
    }

    fn map(&mut self) -> Result<()> {
        let contents = self.input.read()?;
        let words_regex = Regex::new(r"\b[a-zA-Z0-9]+\b").expect("invalid regex");
        self.result = Some(words_regex.find_iter(&contents).count());
        Ok(())
    }

    fn reduce(&mut self, other: &Self) {
        self.result = Some(self.result.unwrap_or(0) + other.result.unwrap_or(0));
    }

    fn result(&self) -> Option<&usize> {
        self.result.as_ref()
    }

    fn into_result(self) -> Option<usize> {
        self.result
    }
}
