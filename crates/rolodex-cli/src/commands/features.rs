use crate::commands::print_json;
use anyhow::Result;
use rolodex_core::features;
use serde::Serialize;

#[derive(Serialize)]
struct FeatureDto {
    title: &'static str,
    description: &'static str,
}

pub fn list_features(json: bool) -> Result<()> {
    if json {
        let items: Vec<FeatureDto> = features()
            .iter()
            .map(|feature| FeatureDto {
                title: feature.title,
                description: feature.description,
            })
            .collect();
        return print_json(&items);
    }
    for feature in features() {
        println!("{}: {}", feature.title, feature.description);
    }
    Ok(())
}
