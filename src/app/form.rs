//! Intake form prompting

use std::io::{self, BufRead, Write};

use super::ChatApp;
use crate::record::{ApplicantForm, Field};

impl<R: BufRead, W: Write> ChatApp<R, W> {
    /// Ask for every field in form order. `None` if input ends part way.
    ///
    /// Values are taken verbatim; validation happens in the backend so the
    /// terminal and the HTTP payload see the same rules.
    pub(super) fn prompt_form(&mut self) -> io::Result<Option<ApplicantForm>> {
        let mut form = ApplicantForm::new();
        for field in Field::ALL {
            self.prompt(&format!("{}: ", field.label()))?;
            match self.read_line()? {
                Some(value) => form.set(field, value),
                None => return Ok(None),
            }
        }
        Ok(Some(form))
    }
}
