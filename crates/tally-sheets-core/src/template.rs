//! Formula template resolution
//!
//! Formula cells store templates referencing other cells by id, e.g.
//! `"#UNITS# * #PRICE#"`. Resolution is a textual rewrite performed on
//! behalf of the external binary writer: each `#id#` token is replaced by
//! the referenced cell's grid address, and the result is handed to the
//! writer for arithmetic evaluation. This is deliberately not an expression
//! engine.

use log::warn;

use crate::error::{Error, Result};
use crate::workbook::Workbook;

/// Token delimiter for cell ids inside formula templates
pub const ID_SEPARATOR: char = '#';

/// Resolve every `#id#` token in a formula template to a cell address.
///
/// Ids are looked up across the whole workbook (first sheet with a match
/// wins); call [`Workbook::assign_positions`] beforehand to avoid the
/// per-token linear scan. An id with no matching cell is replaced by `"0"`
/// and logged — a missing reference must not poison the whole report.
///
/// Templates containing a division are wrapped in an `IF(ISERROR(..))`
/// guard so a zero divisor evaluates to 0 instead of an error.
///
/// Fails with [`Error::UnterminatedToken`] when a `#` is opened but never
/// closed.
pub fn resolve_formula(workbook: &Workbook, template: &str) -> Result<String> {
    let guarded = if template.contains('/') {
        format!("IF(ISERROR({t})=TRUE;0;{t})", t = template)
    } else {
        template.to_string()
    };

    let mut resolved = guarded;
    loop {
        let Some(start) = resolved.find(ID_SEPARATOR) else {
            break;
        };
        let Some(offset) = resolved[start + 1..].find(ID_SEPARATOR) else {
            return Err(Error::UnterminatedToken(template.to_string()));
        };
        let end = start + 1 + offset;

        let id = &resolved[start + 1..end];
        let replacement = match workbook.position_of(id) {
            Some(address) => address.to_string(),
            None => {
                warn!("formula id {:?} does not exist, replaced with 0", id);
                "0".to_string()
            }
        };

        resolved.replace_range(start..=end, &replacement);
    }

    Ok(resolved)
}
