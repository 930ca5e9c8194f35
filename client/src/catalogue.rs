use std::collections::HashMap;

use skirmish_battle::MapData;

/// Installed maps, keyed by script name
#[derive(Debug, Clone, Default)]
pub struct MapCatalogue {
    maps: HashMap<String, MapData>,
}

impl MapCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a map, replacing any entry with the same script name
    pub fn insert(&mut self, map: MapData) -> Option<MapData> {
        self.maps.insert(map.script_name.clone(), map)
    }

    pub fn get(&self, script_name: &str) -> Option<&MapData> {
        self.maps.get(script_name)
    }

    pub fn contains(&self, script_name: &str) -> bool {
        self.maps.contains_key(script_name)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl FromIterator<MapData> for MapCatalogue {
    fn from_iter<I: IntoIterator<Item = MapData>>(iter: I) -> Self {
        let mut catalogue = Self::new();
        for map in iter {
            catalogue.insert(map);
        }
        catalogue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_same_script_name() {
        let mut catalogue = MapCatalogue::new();
        assert!(catalogue.insert(MapData::new("Throne v8", "throne_v8.sd7")).is_none());

        let old = catalogue.insert(MapData::new("Throne v8", "throne_v8_fixed.sd7"));

        assert_eq!(old.map(|m| m.file_name), Some("throne_v8.sd7".to_string()));
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.get("Throne v8").unwrap().file_name, "throne_v8_fixed.sd7");
    }

    #[test]
    fn test_collect_from_maps() {
        let catalogue: MapCatalogue = [
            MapData::new("Throne v8", "throne_v8.sd7"),
            MapData::new("Isthmus v1.0", "isthmus.sd7"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalogue.len(), 2);
        assert!(catalogue.contains("Isthmus v1.0"));
        assert!(!catalogue.contains("DeltaSiegeDry"));
    }
}
