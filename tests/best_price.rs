// End to end lookups against a scripted transport serving fixed pages.

use commodity_pricer::{
    find_best_price, get_records, select_best, transport::Transport, Constraints, Inara, PadSize,
    Record,
};

const LISTING: &str = r#"
<select name="searchcommodity" id="searchcommodity">
    <option value="10250">Alexandrite</option>
    <option value="144">Void Opal</option>
</select>"#;

struct StaticPages {
    goods: String,
    search: String,
}

impl Transport for StaticPages {
    async fn fetch(&self, url: &str) -> String {
        if url.contains("ajaxaction.php") {
            self.goods.clone()
        } else {
            LISTING.to_owned()
        }
    }

    async fn submit(&self, _url: &str, _fields: &[(&str, &str)]) -> String {
        self.search.clone()
    }
}

fn row(location: &str, pad: &str, distance: &str, quantity: &str, price: &str, updated: &str) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>-</td><td>{}</td><td>{}</td><td>{}</td><td>-</td><td>{}</td></tr>",
        location, pad, distance, quantity, price, updated
    )
}

fn inara(goods: String) -> Inara<StaticPages> {
    Inara::new(
        StaticPages {
            goods,
            search: "refid2=222".to_owned(),
        },
        "https://inara.cz",
    )
}

#[tokio::test]
async fn single_row_scenario() {
    let source = inara(row("system | station", "L", "300ly", "300,100", "100Cr", "1 minute ago"));

    let records = get_records(&source, "Alexandrite", "Veroandi").await;

    let expected = Record {
        system: "system".to_owned(),
        station: "station".to_owned(),
        pad: PadSize::Large,
        distance: 300,
        quantity: 300_100,
        max_quantity: 300_100,
        limited_demand: false,
        price: 100,
        updated: "1 minute ago".to_owned(),
        updated_secs: 60,
    };
    assert_eq!(records, vec![expected.clone()]);

    let constraints = Constraints {
        max_distance: 9_999_999,
        min_pad: PadSize::Small,
        min_quantity: 0,
    };
    assert_eq!(select_best(&records, &constraints), Some(&expected));
}

#[tokio::test]
async fn limited_demand_below_requested_quantity() {
    let source = inara(row("system | station", "L", "300ly", "more than 50", "100Cr", "1 minute ago"));

    let records = get_records(&source, "Alexandrite", "Veroandi").await;
    assert_eq!(records[0].max_quantity, 50);
    assert!(records[0].limited_demand);

    let constraints = Constraints {
        min_quantity: 100,
        ..Constraints::default()
    };
    assert_eq!(select_best(&records, &constraints), None);
}

#[tokio::test]
async fn best_price_within_distance() {
    let goods = [
        row("Veroandi | Near Port", "M", "12.4 ly", "1,000", "2,100 Cr", "3 hours ago"),
        row("Sol | Galileo", "L", "55 ly", "5,000", "2,500 Cr", "1 day ago"),
        row("Lave | Lave Station", "L", "140 ly", "5,000", "3,900 Cr", "5 minutes ago"),
        row("Old | Outpost", "S", "8 ly", "more than 200", "4,400 Cr", "7 hours ago"),
        row("Broken | Dock", "X", "1 ly", "5,000", "9,999 Cr", "1 minute ago"),
    ]
    .concat();
    let source = inara(goods);

    let expected = [(20, "Near Port"), (100, "Galileo"), (9_999_999, "Lave Station")];
    for (max_distance, station) in expected {
        let constraints = Constraints {
            max_distance,
            ..Constraints::default()
        };

        let best = find_best_price(&source, "void opal", "Veroandi", &constraints)
            .await
            .unwrap();
        assert_eq!(best.station, station, "max distance {}", max_distance);
    }

    assert_eq!(get_records(&source, "Void Opal", "Veroandi").await.len(), 4);
}

#[tokio::test]
async fn lookup_failures_degrade_to_nothing() {
    let source = inara(row("system | station", "L", "300ly", "1", "100Cr", "1 minute ago"));
    assert!(get_records(&source, "Painite", "Veroandi").await.is_empty());

    let no_system = Inara::new(
        StaticPages {
            goods: String::new(),
            search: String::new(),
        },
        "https://inara.cz",
    );
    assert_eq!(
        find_best_price(&no_system, "Alexandrite", "Nowhere", &Constraints::default()).await,
        None
    );
}

#[tokio::test]
async fn repeated_lookups_are_identical() {
    let goods = [
        row("A | One", "L", "10 ly", "more than 10", "500 Cr", "2 hours ago"),
        row("B | Two", "s", "20 ly", "1,500", "450 Cr", "2 minutes ago"),
    ]
    .concat();
    let source = inara(goods);

    let first = get_records(&source, "Alexandrite", "Veroandi").await;
    let second = get_records(&source, "Alexandrite", "Veroandi").await;

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}
