use chrono::Datelike;
use folio_core::{Document, Selector};

/// Write `year` into the year display, if the page has one
pub fn populate_year<D: Document + ?Sized>(doc: &mut D, selector: &Selector, year: i32) -> bool {
    match doc.query(selector) {
        Some(el) => {
            doc.set_text(el, &year.to_string());
            true
        }
        None => false,
    }
}

/// Calendar year in the local time zone
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
