use crate::{
    error::DslError,
    serialize,
    validate::{DistanceType, ValidationMethod},
    value::{Value, ValueMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

///
/// GeoPoint
///
/// Coordinate pair serialized in the `{ lat, lon }` object form.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for Value {
    fn from(point: GeoPoint) -> Self {
        let mut map = ValueMap::new();
        map.insert("lat", point.lat);
        map.insert("lon", point.lon);
        Self::Map(map)
    }
}

///
/// GeoDistanceQuery
///
/// Matches documents within `distance` of a center point:
/// `{ geo_distance: { distance, ..., <field>: { lat, lon } } }`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct GeoDistanceQuery {
    field: String,
    point: Option<GeoPoint>,
    opts: ValueMap,
}

impl GeoDistanceQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            point: None,
            opts: ValueMap::new(),
        }
    }

    /// Radius with unit suffix, e.g. `"12km"`.
    #[must_use]
    pub fn distance(mut self, distance: impl Into<String>) -> Self {
        self.opts.insert("distance", distance.into());
        self
    }

    #[must_use]
    pub fn point(mut self, point: GeoPoint) -> Self {
        self.point = Some(point);
        self
    }

    #[must_use]
    pub fn distance_type(mut self, distance_type: DistanceType) -> Self {
        self.opts.insert("distance_type", distance_type);
        self
    }

    #[must_use]
    pub fn validation_method(mut self, method: ValidationMethod) -> Self {
        self.opts.insert("validation_method", method);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        if !self.opts.contains_key("distance") {
            return Err(DslError::required("GeoDistanceQuery", "distance"));
        }
        let Some(point) = self.point else {
            return Err(DslError::required("GeoDistanceQuery", "point"));
        };

        let mut body = serialize::map_to_plain(&self.opts)?;
        body.insert(self.field.clone(), serialize::to_plain(&Value::from(point))?);
        Ok(serialize::single("geo_distance", JsonValue::Object(body)))
    }
}

///
/// GeoBoundingBoxQuery
///
/// `{ geo_bounding_box: { ..., <field>: { top_left, bottom_right } } }`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct GeoBoundingBoxQuery {
    field: String,
    top_left: Option<GeoPoint>,
    bottom_right: Option<GeoPoint>,
    opts: ValueMap,
}

impl GeoBoundingBoxQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            top_left: None,
            bottom_right: None,
            opts: ValueMap::new(),
        }
    }

    #[must_use]
    pub fn top_left(mut self, point: GeoPoint) -> Self {
        self.top_left = Some(point);
        self
    }

    #[must_use]
    pub fn bottom_right(mut self, point: GeoPoint) -> Self {
        self.bottom_right = Some(point);
        self
    }

    #[must_use]
    pub fn validation_method(mut self, method: ValidationMethod) -> Self {
        self.opts.insert("validation_method", method);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let Some(top_left) = self.top_left else {
            return Err(DslError::required("GeoBoundingBoxQuery", "top_left"));
        };
        let Some(bottom_right) = self.bottom_right else {
            return Err(DslError::required("GeoBoundingBoxQuery", "bottom_right"));
        };

        let mut bounds = JsonMap::new();
        bounds.insert(
            "top_left".to_string(),
            serialize::to_plain(&Value::from(top_left))?,
        );
        bounds.insert(
            "bottom_right".to_string(),
            serialize::to_plain(&Value::from(bottom_right))?,
        );

        let mut body = serialize::map_to_plain(&self.opts)?;
        body.insert(self.field.clone(), JsonValue::Object(bounds));
        Ok(serialize::single("geo_bounding_box", JsonValue::Object(body)))
    }
}
