// src/results.rs
//
// View-model for the grouped results. Owns the arrival-to-display rules:
// descending count order, collapsed year/price ranges, and the per-group
// stable re-sort of the cached car array.

use crate::api::{Car, GroupedResult};
use crate::config::consts::LISTING_ORIGIN;
use crate::config::options::SortKey;

/// One group plus its render-only state.
#[derive(Clone, Debug)]
pub struct GroupView {
    pub group: GroupedResult,
    /// Car list starts hidden
    pub expanded: bool,
    pub sort_key: SortKey,
    /// Stable sort order: indices into `group.cars`
    pub order: Vec<usize>,
}

impl GroupView {
    pub fn new(group: GroupedResult, sort_key: SortKey) -> Self {
        let order = sort_order(&group.cars, sort_key);
        Self { group, expanded: false, sort_key, order }
    }

    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key != key {
            self.sort_key = key;
            self.order = sort_order(&self.group.cars, key);
        }
    }

    pub fn header(&self) -> String {
        group_header(&self.group)
    }

    /// Cars in display order.
    pub fn cars(&self) -> impl Iterator<Item = &Car> {
        self.order.iter().filter_map(|&i| self.group.cars.get(i))
    }

    /// First car's image in server order (not display order).
    pub fn lead_image(&self) -> Option<&str> {
        self.group.cars.first().and_then(|c| c.img_src.as_deref())
    }
}

/// Sort groups by count, biggest first, ties stable in server order,
/// and wrap each in its render state.
pub fn build_views(mut groups: Vec<GroupedResult>, default_sort: SortKey) -> Vec<GroupView> {
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
        .into_iter()
        .map(|g| GroupView::new(g, default_sort))
        .collect()
}

fn sort_order(cars: &[Car], key: SortKey) -> Vec<usize> {
    let mut ix: Vec<usize> = (0..cars.len()).collect();
    match key {
        SortKey::Year => ix.sort_by_key(|&i| cars[i].year),
        SortKey::Price => ix.sort_by_key(|&i| cars[i].price),
    }
    ix
}

/// Single year when the group has one car or all years agree, else "min-max".
pub fn year_range(cars: &[Car]) -> String {
    let Some(first) = cars.first() else { return s!(); };
    let mut min = first.year;
    let mut max = first.year;
    for car in &cars[1..] {
        min = min.min(car.year);
        max = max.max(car.year);
    }
    if cars.len() == 1 || min == max {
        min.to_string()
    } else {
        format!("{min}-{max}")
    }
}

/// "EUR X" when the prices agree, else "EUR min - EUR max".
pub fn price_range(cars: &[Car]) -> String {
    let Some(first) = cars.first() else { return s!(); };
    let mut min = first.price;
    let mut max = first.price;
    for car in &cars[1..] {
        min = min.min(car.price);
        max = max.max(car.price);
    }
    if min == max {
        format!("EUR {min}")
    } else {
        format!("EUR {min} - EUR {max}")
    }
}

/// "{make} {model }{year_range} ({count}) - {price_range}".
/// The model segment disappears when the group wasn't keyed on model;
/// a missing group make falls back to the first car's make.
pub fn group_header(group: &GroupedResult) -> String {
    let make = group
        .make
        .as_deref()
        .or_else(|| group.cars.first().map(|c| c.make.as_str()))
        .unwrap_or("");

    let model = match group.model.as_deref() {
        Some(m) if !m.is_empty() => join!(m, " "),
        _ => s!(),
    };

    format!(
        "{} {}{} ({}) - {}",
        make,
        model,
        year_range(&group.cars),
        group.count,
        price_range(&group.cars),
    )
}

/// One line per listing, linked against the listing-site origin.
pub fn car_line(car: &Car) -> String {
    format!(
        "{} {} - {} ({}cm3) - EUR {}",
        car.make, car.model, car.year, car.engine_capacity, car.price
    )
}

pub fn car_url(car: &Car) -> String {
    join!(LISTING_ORIGIN, &car.link)
}
