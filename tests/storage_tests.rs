use ecp_codec::utils::{load_mapped_items, save_mapped_items};
use ecp_codec::{EcpTranscoder, Intent, MappedItem};
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod storage_tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ecp_map.json");

        let items = vec![
            MappedItem::new(
                "Collector's Rocket Launcher",
                vec!["Collector_s_Rocket_Launcher".to_string()],
            ),
            MappedItem::new("Half-Zatoichi", vec!["Half_Zatoichi".to_string()]),
        ];

        save_mapped_items(&path, &items);
        assert_eq!(load_mapped_items(&path), items);
    }

    #[test]
    fn test_missing_file_is_created_and_reported_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("ecp_map.json");

        assert!(!path.exists());
        assert!(load_mapped_items(&path).is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_unparseable_file_is_reported_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ecp_map.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(load_mapped_items(&path).is_empty());
    }

    #[test]
    fn test_empty_file_is_reported_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ecp_map.json");
        fs::write(&path, "").unwrap();

        assert!(load_mapped_items(&path).is_empty());
    }

    #[test]
    fn test_on_disk_keys_are_camel_case() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ecp_map.json");

        save_mapped_items(
            &path,
            &[MappedItem::new("Half-Zatoichi", vec!["Half_Zatoichi".to_string()])],
        );

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"itemName\""));
        assert!(raw.contains("\"candidates\""));
    }

    #[test]
    fn test_persisted_cache_survives_a_new_transcoder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ecp_map.json");

        let token = {
            let mut transcoder = EcpTranscoder::default();
            let token = transcoder
                .encode("Collector's Killstreak Rocket Launcher", Intent::Buy)
                .unwrap();
            save_mapped_items(&path, transcoder.mapped_items());
            token
        };

        let mut fresh = EcpTranscoder::default();
        fresh.preload_mapped_items(load_mapped_items(&path));

        let decoded = fresh.decode(&token).unwrap();
        assert_eq!(decoded.item_name, "Collector's Killstreak Rocket Launcher");
        assert_eq!(decoded.intent, Intent::Buy);
    }
}
