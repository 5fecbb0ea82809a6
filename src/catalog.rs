//! The movie catalog: one canonical, immutable list of titles.
//!
//! Every screen borrows the same [`Catalog`]. Titles are identified only
//! by their position; there is no other metadata.

use serde::Serialize;

/// Number of titles in the catalog.
pub const CATALOG_LEN: usize = 10;

/// Canonical title list, in display order.
pub const MOVIES: [&str; CATALOG_LEN] = [
    "Laskar Pelangi",
    "Ada Apa Dengan Cinta?",
    "Habibie & Ainun",
    "Marlina Si Pembunuh Dalam Empat Babak",
    "Gundala",
    "Pengabdi Setan",
    "Dilan 1990",
    "Imperfect",
    "Keluarga Cemara",
    "Perempuan Tanah Jahanam",
];

/// Description shown on every detail screen.
pub const DESCRIPTION: &str = "Film populer Indonesia.";

/// Static author lines shown on the About screen.
pub const ABOUT_LINES: [&str; 4] = [
    "Nama: Ilham Alief Fatih",
    "Email: ilhamxalif@gmail.com",
    "Asal: Institut Teknologi Batam",
    "Jurusan: Sistem Informasi",
];

/// Read-only view over the title list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    titles: &'static [&'static str],
}

/// A title paired with its catalog index, for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub index: usize,
    pub title: &'static str,
}

impl Catalog {
    /// The built-in catalog.
    pub const fn builtin() -> Self {
        Catalog { titles: &MOVIES }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Title at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.titles.get(index).copied()
    }

    /// Title at `index`, falling back to the first title when out of range.
    ///
    /// Detail routes are never validated, so an unknown id shows the
    /// first film instead of failing.
    pub fn title_or_first(&self, index: usize) -> &'static str {
        self.get(index)
            .or_else(|| self.titles.first().copied())
            .unwrap_or("")
    }

    pub fn titles(&self) -> &'static [&'static str] {
        self.titles
    }

    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.titles
            .iter()
            .enumerate()
            .map(|(index, title)| Entry { index, title })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_ten_titles_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), CATALOG_LEN);
        assert_eq!(catalog.get(0), Some("Laskar Pelangi"));
        assert_eq!(catalog.get(4), Some("Gundala"));
        assert_eq!(catalog.get(9), Some("Perempuan Tanah Jahanam"));
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert_eq!(Catalog::builtin().get(10), None);
    }

    #[test]
    fn title_or_first_falls_back_to_index_zero() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.title_or_first(7), "Imperfect");
        assert_eq!(catalog.title_or_first(10), "Laskar Pelangi");
        assert_eq!(catalog.title_or_first(usize::MAX), "Laskar Pelangi");
    }

    #[test]
    fn entries_carry_their_index() {
        let entries: Vec<Entry> = Catalog::builtin().entries().collect();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[2], Entry { index: 2, title: "Habibie & Ainun" });
    }

    #[test]
    fn default_is_builtin() {
        assert_eq!(Catalog::default(), Catalog::builtin());
    }
}
