use std::io::Write;

use crate::errors::CatalogError;
use crate::session::SessionWithTags;

const SEPARATOR: &str = "----------------------------------------";

/// The text report: counts followed by one block per selected session.
pub struct Report<'a> {
    decoded: usize,
    selected: &'a [SessionWithTags],
}

impl<'a> Report<'a> {
    /// `decoded` is the number of sessions before filtering.
    pub fn new(decoded: usize, selected: &'a [SessionWithTags]) -> Self {
        Self { decoded, selected }
    }

    pub fn write_to(&self, mut out: impl Write) -> Result<(), CatalogError> {
        self.render(&mut out)
            .and_then(|_| out.flush())
            .map_err(|source| CatalogError::WriteFailed { source })
    }

    fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Count: {}", self.decoded)?;
        writeln!(out, "Filtered Count: {}", self.selected.len())?;

        for session in self.selected {
            let item = &session.item;
            let fields = &item.additional_fields;

            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "Name: {}", item.name)?;
            writeln!(out, "Teacher: {}", fields.sub_headline)?;
            writeln!(out, "Description: {}", fields.description)?;
            writeln!(out, "Category: {}", fields.category)?;
            writeln!(out, "Expertise: {}", fields.expertise)?;
            writeln!(out, "Headline: {}", fields.headline)?;
            writeln!(out, "Event Date: {}", fields.event_date)?;
            writeln!(out, "Duration Start: {}", fields.duration_start)?;
            writeln!(out, "Duration End: {}", fields.duration_end)?;
        }

        Ok(())
    }
}
