use ecp_codec::{EcpTranscoder, Intent};
use std::fs;
use std::path::Path;

/// One fixture row: an original item name and the exact token it should
/// encode to (with a sell-side caller, so a `buy_` prefix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFixture {
    pub item_name: String,
    pub expected_token: String,
}

/// Parses a fixture file of `ITEM:`/`EXPECTED:` line pairs. Lines starting
/// with `COMMENT:` and blank lines are ignored.
pub fn load_item_fixtures(file_path: &Path) -> Vec<ItemFixture> {
    let content = fs::read_to_string(file_path).expect("Failed to read fixture file");

    let mut fixtures = Vec::new();
    let mut pending_item: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with("COMMENT:") {
            continue;
        }

        if let Some(item_name) = line.strip_prefix("ITEM:") {
            pending_item = Some(item_name.trim().to_string());
        } else if let Some(expected) = line.strip_prefix("EXPECTED:") {
            let item_name = pending_item
                .take()
                .unwrap_or_else(|| panic!("EXPECTED line without a preceding ITEM: {}", line));
            fixtures.push(ItemFixture {
                item_name,
                expected_token: expected.trim().to_string(),
            });
        } else {
            panic!("Unrecognized fixture line: {}", line);
        }
    }

    assert!(
        pending_item.is_none(),
        "Trailing ITEM line without an EXPECTED pair"
    );

    fixtures
}

/// Encodes the fixture's item name with a sell intent and asserts both the
/// exact expected token and a byte-exact decode back to the original.
pub fn assert_exact_round_trip(transcoder: &mut EcpTranscoder, fixture: &ItemFixture) {
    let token = transcoder
        .encode(&fixture.item_name, Intent::Sell)
        .unwrap_or_else(|e| panic!("Failed to encode {:?}: {}", fixture.item_name, e));

    assert_eq!(
        token, fixture.expected_token,
        "Unexpected token for {:?}",
        fixture.item_name
    );

    let decoded = transcoder
        .decode(&token)
        .unwrap_or_else(|e| panic!("Failed to decode {:?}: {}", token, e));

    assert_eq!(decoded.item_name, fixture.item_name);
    assert_eq!(decoded.intent, Intent::Sell);
}
