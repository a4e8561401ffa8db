use crate::error::{DiagError,Result};

// A circuit description held as trimmed, non-blank lines. The sections of
// the format are delimited by a header token ("COMPONENTS:") and a matching
// end token ("ENDCOMPONENTS"); this type only knows how to look a section
// body up, reading the text from disk is the caller's business.
pub struct Document {
    lines:Vec<String>
}

impl Document {
    pub fn new(text:&str)->Self {
	let lines = text.lines()
	    .map(|l| l.trim())
	    .filter(|l| !l.is_empty())
	    .map(String::from)
	    .collect();
	Document{ lines }
    }

    pub fn lines(&self)->&[String] {
	&self.lines
    }

    // Body of the section opened by `header` and closed by `end`.
    pub fn section(&self,header:&str,end:&str)->Result<&[String]> {
	let i = self.position(header)?;
	let j = self.position(end)?;
	if j < i {
	    return Err(DiagError::Structural(format!("section {} closed before it opens",header)));
	}
	Ok(&self.lines[i+1..j])
    }

    fn position(&self,token:&str)->Result<usize> {
	self.lines.iter().position(|l| l == token)
	    .ok_or_else(|| DiagError::Structural(format!("missing {} marker",token)))
    }
}
