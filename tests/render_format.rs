// tests/render_format.rs
//
// Display rules for grouped results: ordering, range collapsing, headers,
// and the per-group stable re-sort.
//
use car_browse::api::{Car, GroupedResult};
use car_browse::config::options::SortKey;
use car_browse::results::{self, GroupView};

fn car(make: &str, model: &str, year: i32, price: i64) -> Car {
    Car {
        make: make.into(),
        model: model.into(),
        year,
        price,
        engine_capacity: 1984,
        img_src: Some("https://img.example/1.jpg".into()),
        link: "/auto/123".into(),
    }
}

fn group(make: &str, model: Option<&str>, cars: Vec<Car>) -> GroupedResult {
    GroupedResult {
        make: Some(make.into()),
        model: model.map(|m| m.into()),
        year: None,
        count: cars.len(),
        cars,
    }
}

#[test]
fn groups_render_biggest_first_with_stable_ties() {
    let groups = vec![
        group("Fiat", None, vec![car("Fiat", "Punto", 2010, 3000)]),
        group("Audi", None, vec![
            car("Audi", "A4", 2019, 10000),
            car("Audi", "A6", 2021, 12000),
        ]),
        group("BMW", None, vec![car("BMW", "320", 2015, 9000)]),
    ];

    let views = results::build_views(groups, SortKey::Year);
    let makes: Vec<_> = views
        .iter()
        .map(|v| v.group.make.clone().unwrap())
        .collect();
    // Audi (2) first; Fiat and BMW (1 each) keep server order
    assert_eq!(makes, vec!["Audi", "Fiat", "BMW"]);
}

#[test]
fn year_range_collapses_for_single_car_or_equal_years() {
    assert_eq!(results::year_range(&[car("A", "x", 2019, 1)]), "2019");
    assert_eq!(
        results::year_range(&[car("A", "x", 2020, 1), car("A", "y", 2020, 2)]),
        "2020"
    );
    assert_eq!(
        results::year_range(&[car("A", "x", 2021, 1), car("A", "y", 2019, 2)]),
        "2019-2021"
    );
    assert_eq!(results::year_range(&[]), "");
}

#[test]
fn price_range_repeats_the_currency_prefix() {
    assert_eq!(results::price_range(&[car("A", "x", 2019, 5000)]), "EUR 5000");
    assert_eq!(
        results::price_range(&[car("A", "x", 2019, 5000), car("A", "y", 2020, 5000)]),
        "EUR 5000"
    );
    assert_eq!(
        results::price_range(&[car("A", "x", 2019, 12000), car("A", "y", 2020, 10000)]),
        "EUR 10000 - EUR 12000"
    );
}

#[test]
fn header_matches_documented_example() {
    let g = group("Audi", None, vec![
        car("Audi", "A4", 2019, 10000),
        car("Audi", "A6", 2021, 12000),
    ]);
    assert_eq!(
        results::group_header(&g),
        "Audi 2019-2021 (2) - EUR 10000 - EUR 12000"
    );
}

#[test]
fn header_includes_model_segment_when_grouped_on_model() {
    let g = group("Audi", Some("A4"), vec![car("Audi", "A4", 2019, 10000)]);
    assert_eq!(results::group_header(&g), "Audi A4 2019 (1) - EUR 10000");
}

#[test]
fn header_make_falls_back_to_first_car() {
    let mut g = group("Audi", None, vec![car("Audi", "A4", 2019, 10000)]);
    g.make = None; // grouped by year only
    assert_eq!(results::group_header(&g), "Audi 2019 (1) - EUR 10000");
}

#[test]
fn sort_key_reorders_cars_stably() {
    let g = group("Audi", None, vec![
        car("Audi", "A6", 2021, 9000),
        car("Audi", "A4", 2018, 12000),
        car("Audi", "A3", 2018, 7000),
    ]);
    let mut view = GroupView::new(g, SortKey::Year);

    let years: Vec<i32> = view.cars().map(|c| c.year).collect();
    assert_eq!(years, vec![2018, 2018, 2021]);
    // equal years keep arrival order: A4 before A3
    let models: Vec<&str> = view.cars().map(|c| c.model.as_str()).collect();
    assert_eq!(models, vec!["A4", "A3", "A6"]);

    view.set_sort(SortKey::Price);
    let prices: Vec<i64> = view.cars().map(|c| c.price).collect();
    assert_eq!(prices, vec![7000, 9000, 12000]);
}

#[test]
fn car_list_starts_hidden_and_links_to_listing_origin() {
    let g = group("Audi", None, vec![car("Audi", "A4", 2019, 10000)]);
    let view = GroupView::new(g, SortKey::Year);
    assert!(!view.expanded);

    let first = view.cars().next().unwrap();
    assert_eq!(
        results::car_url(first),
        "https://www.polovniautomobili.com/auto/123"
    );
    assert_eq!(results::car_line(first), "Audi A4 - 2019 (1984cm3) - EUR 10000");
}
