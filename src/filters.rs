// src/filters.rs
//
// Make/model filter rows. Two independent sets exist (include and exclude);
// within one set a make may only be claimed by a single row, so sibling
// rows grey it out until the claiming row is removed or re-picked.

use crate::api::{MakeCatalog, MakeFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Include,
    Exclude,
}

impl FilterKind {
    pub fn label(&self) -> &'static str {
        match self { FilterKind::Include => "Include", FilterKind::Exclude => "Exclude" }
    }
}

#[derive(Clone, Debug)]
pub struct FilterRow {
    pub id: u64,
    pub make: Option<String>,
    pub models: Vec<String>,
}

impl FilterRow {
    /// Selecting a make (or clearing it) resets the dependent model list,
    /// mirroring the model selector being repopulated.
    pub fn set_make(&mut self, make: Option<String>) {
        if self.make != make {
            self.make = make;
            self.models.clear();
        }
    }

    pub fn toggle_model(&mut self, model: &str) {
        if let Some(pos) = self.models.iter().position(|m| m == model) {
            self.models.remove(pos);
        } else {
            self.models.push(s!(model));
        }
    }
}

#[derive(Debug)]
pub struct FilterRows {
    pub kind: FilterKind,
    rows: Vec<FilterRow>,
    next_id: u64,
}

impl FilterRows {
    pub fn new(kind: FilterKind) -> Self {
        Self { kind, rows: Vec::new(), next_id: 0 }
    }

    pub fn add_row(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(FilterRow { id, make: None, models: Vec::new() });
        id
    }

    pub fn remove_row(&mut self, id: u64) {
        self.rows.retain(|r| r.id != id);
    }

    pub fn rows(&self) -> &[FilterRow] { &self.rows }
    pub fn rows_mut(&mut self) -> &mut Vec<FilterRow> { &mut self.rows }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Is `make` claimed by a row other than `row_id`?
    pub fn taken_elsewhere(&self, row_id: u64, make: &str) -> bool {
        self.rows
            .iter()
            .any(|r| r.id != row_id && r.make.as_deref() == Some(make))
    }

    /// Makes the given row may still pick: everything in the catalog not
    /// claimed by a sibling row of this same kind.
    pub fn selectable_makes<'a>(
        &'a self,
        row_id: u64,
        catalog: &'a MakeCatalog,
    ) -> impl Iterator<Item = (&'a str, bool)> + 'a {
        catalog
            .keys()
            .map(move |make| (make.as_str(), !self.taken_elsewhere(row_id, make)))
    }

    /// Serialize to the query parameter shape; None when no row has a make.
    pub fn to_param(&self) -> Option<MakeFilter> {
        let mut map = MakeFilter::new();
        for row in &self.rows {
            if let Some(make) = &row.make {
                map.insert(make.clone(), row.models.clone());
            }
        }
        if map.is_empty() { None } else { Some(map) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MakeCatalog {
        let mut c = MakeCatalog::new();
        c.insert(s!("Audi"), vec![s!("A4"), s!("A6")]);
        c.insert(s!("BMW"), vec![s!("320")]);
        c.insert(s!("Fiat"), vec![s!("Punto")]);
        c
    }

    fn enabled_for(rows: &FilterRows, row_id: u64, make: &str) -> bool {
        rows.selectable_makes(row_id, &catalog())
            .find(|(m, _)| *m == make)
            .map(|(_, enabled)| enabled)
            .unwrap_or(false)
    }

    #[test]
    fn chosen_make_is_disabled_in_sibling_rows() {
        let mut rows = FilterRows::new(FilterKind::Include);
        let a = rows.add_row();
        let b = rows.add_row();

        rows.rows_mut()[0].set_make(Some(s!("Audi")));

        assert!(!enabled_for(&rows, b, "Audi"));
        assert!(enabled_for(&rows, b, "BMW"));
        // the claiming row still sees its own make as selectable
        assert!(enabled_for(&rows, a, "Audi"));
    }

    #[test]
    fn removing_a_row_frees_its_make() {
        let mut rows = FilterRows::new(FilterKind::Exclude);
        let a = rows.add_row();
        let b = rows.add_row();
        rows.rows_mut()[0].set_make(Some(s!("Fiat")));
        assert!(!enabled_for(&rows, b, "Fiat"));

        rows.remove_row(a);
        assert!(enabled_for(&rows, b, "Fiat"));
    }

    #[test]
    fn changing_make_clears_models() {
        let mut row = FilterRow { id: 0, make: Some(s!("Audi")), models: vec![s!("A4")] };
        row.toggle_model("A6");
        assert_eq!(row.models, vec![s!("A4"), s!("A6")]);
        row.toggle_model("A4");
        assert_eq!(row.models, vec![s!("A6")]);

        row.set_make(Some(s!("BMW")));
        assert!(row.models.is_empty());
    }

    #[test]
    fn to_param_skips_rows_without_a_make() {
        let mut rows = FilterRows::new(FilterKind::Include);
        rows.add_row(); // left untouched
        assert!(rows.to_param().is_none());

        rows.add_row();
        rows.rows_mut()[1].set_make(Some(s!("Audi")));
        rows.rows_mut()[1].toggle_model("A4");

        let map = rows.to_param().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["Audi"], vec![s!("A4")]);
    }
}
