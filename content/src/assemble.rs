//! Page assembly: content source in, validated props record out.

use std::collections::HashSet;

use crate::source::ContentSource;
use crate::validate::check_keys;
use crate::{ContentError, EntryId, HomeProps};

/// Gather the four sequences from `source` into one props record.
///
/// Input order is preserved. Entries without an explicit id get one:
/// slides by position (`slide-1`, ...), tiles and cards from their name or
/// title. Keys are then checked for uniqueness.
///
/// # Errors
///
/// Returns the source's [`ContentError`] if it cannot be read, or
/// [`ContentError::DuplicateKey`] if two entries in one list collide.
pub fn assemble_home_props(source: &dyn ContentSource) -> Result<HomeProps, ContentError> {
    let doc = source.document()?;
    let mut props = HomeProps {
        header_data: doc.header_data,
        banner: doc.banner,
        curtain_types: doc.curtain_types,
        new_arrivals: doc.new_arrivals,
    };
    assign_missing_ids(&mut props);
    check_keys(&props)?;
    Ok(props)
}

/// Give every blank id a derived one that is not already taken.
///
/// Explicit ids are reserved first, so a derived id never shadows one an
/// editor wrote. Collisions get a numeric suffix (`sheer-curtains-2`).
fn fill_ids<'a>(entries: impl Iterator<Item = (&'a mut EntryId, &'a str)>, prefix: &str) {
    let entries: Vec<_> = entries.collect();
    let mut taken: HashSet<String> = entries
        .iter()
        .filter(|(id, _)| !id.is_blank())
        .map(|(id, _)| id.as_str().to_owned())
        .collect();

    for (position, (id, key)) in entries.into_iter().enumerate() {
        if !id.is_blank() {
            continue;
        }
        let slug = EntryId::from_key(key);
        let base = if slug.is_blank() { format!("{prefix}-{}", position + 1) } else { slug.to_string() };
        let mut candidate = base.clone();
        let mut n = 2;
        while taken.contains(&candidate) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        taken.insert(candidate.clone());
        *id = EntryId::new(candidate);
    }
}

pub(crate) fn assign_missing_ids(props: &mut HomeProps) {
    fill_ids(props.banner.iter_mut().map(|s| (&mut s.id, "")), "slide");
    fill_ids(props.curtain_types.iter_mut().map(|c| (&mut c.id, c.name.as_str())), "curtain");
    fill_ids(props.new_arrivals.iter_mut().map(|a| (&mut a.id, a.title.as_str())), "arrival");
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod tests;
