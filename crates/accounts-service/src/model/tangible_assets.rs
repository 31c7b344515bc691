use filing_framework::RestMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub at_period_start: Option<i64>,
    pub additions: Option<i64>,
    pub disposals: Option<i64>,
    pub revaluations: Option<i64>,
    pub transfers: Option<i64>,
    pub at_period_end: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depreciation {
    pub at_period_start: Option<i64>,
    pub charge_for_year: Option<i64>,
    pub on_disposals: Option<i64>,
    pub other_adjustments: Option<i64>,
    pub at_period_end: Option<i64>,
}

/// Movements of one asset class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TangibleAssetsResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depreciation: Option<Depreciation>,
    pub net_book_value_at_end_of_current_period: Option<i64>,
    pub net_book_value_at_end_of_previous_period: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TangibleAssetClasses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_and_buildings: Option<TangibleAssetsResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_and_machinery: Option<TangibleAssetsResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures_and_fittings: Option<TangibleAssetsResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_equipment: Option<TangibleAssetsResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_vehicles: Option<TangibleAssetsResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<TangibleAssetsResource>,
}

impl TangibleAssetClasses {
    /// Present classes with their JSON names, in declaration order.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &TangibleAssetsResource)> {
        [
            ("land_and_buildings", &self.land_and_buildings),
            ("plant_and_machinery", &self.plant_and_machinery),
            ("fixtures_and_fittings", &self.fixtures_and_fittings),
            ("office_equipment", &self.office_equipment),
            ("motor_vehicles", &self.motor_vehicles),
            ("total", &self.total),
        ]
        .into_iter()
        .filter_map(|(name, class)| class.as_ref().map(|class| (name, class)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TangibleAssets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    #[serde(flatten)]
    pub classes: TangibleAssetClasses,
    #[serde(flatten)]
    pub meta: RestMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TangibleAssetsFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    #[serde(flatten)]
    pub classes: TangibleAssetClasses,
}
