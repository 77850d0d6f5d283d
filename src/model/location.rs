use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub desc: String,
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl Entity for Location {
    const KIND: &'static str = "Location";

    type New = NewLocation;
    type Patch = LocationPatch;

    fn create(id: String, data: NewLocation) -> Self {
        Self {
            id,
            name: data.name,
            desc: data.desc,
            lat: data.lat,
            lng: data.lng,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: LocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(desc) = patch.desc {
            self.desc = desc;
        }
        if let Some(lat) = patch.lat {
            self.lat = lat;
        }
        if let Some(lng) = patch.lng {
            self.lng = lng;
        }
    }
}
