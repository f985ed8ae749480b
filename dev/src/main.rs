//! Scratch binary for poking at the codec during development.

use ecp_codec::{EcpTranscoder, EcpTranscoderConfig, Intent};
use log::info;

fn main() {
    env_logger::init();

    let mut transcoder = EcpTranscoder::new(EcpTranscoderConfig {
        use_bold_chars: true,
        use_keyword_abbreviations: true,
    });

    let samples = [
        "Strange Shotgun",
        "Collector's Killstreak Rocket Launcher",
        "Taunt: Kazotsky Kick",
        "Mann Co. Supply Crate Key",
    ];

    for name in samples {
        let token = transcoder
            .encode(name, Intent::Buy)
            .expect("sample names are non-empty");
        let decoded = transcoder.decode(&token).expect("freshly encoded token");

        info!("Cache now holds {} record(s)", transcoder.mapped_items().len());
        println!("{} -> {} -> {} ({})", name, token, decoded.item_name, decoded.intent);
    }
}
