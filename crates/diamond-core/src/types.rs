//! Request and response types for diamond pricing.

use serde::{Deserialize, Serialize};

/// A batch of identical diamonds priced together.
///
/// Quantity is unsigned, so negative counts are rejected when the request
/// is deserialized. No further range validation is applied to carat or
/// quantity beyond their types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiamondGroup {
    /// Diamond weight in carats.
    pub carat: f64,
    /// Number of diamonds in the group.
    pub quantity: u32,
    /// Cut grade (case-insensitive).
    pub cut: String,
    /// Color grade (case-sensitive, D through J).
    pub color: String,
    /// Clarity grade (case-sensitive, FL through SI2).
    pub clarity: String,
    /// Certification body, or "uncertified".
    pub certification: String,
}

/// A pricing request: an ordered list of diamond groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Groups to price, in order.
    pub groups: Vec<DiamondGroup>,
}

/// Echo of a group's input attributes, returned alongside its prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetails {
    /// Number of diamonds in the group.
    pub quantity: u32,
    /// Diamond weight in carats.
    pub carat: f64,
    /// Cut grade, as submitted.
    pub cut: String,
    /// Color grade, as submitted.
    pub color: String,
    /// Clarity grade, as submitted.
    pub clarity: String,
    /// Certification, as submitted.
    pub certification: String,
}

impl From<&DiamondGroup> for GroupDetails {
    fn from(group: &DiamondGroup) -> Self {
        Self {
            quantity: group.quantity,
            carat: group.carat,
            cut: group.cut.clone(),
            color: group.color.clone(),
            clarity: group.clarity.clone(),
            certification: group.certification.clone(),
        }
    }
}

/// Priced result for a single group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResult {
    /// 1-based position of the group in the request.
    pub group_id: u32,
    /// Price of one diamond, rounded to 2 decimal places.
    pub per_diamond: f64,
    /// Group total (per-diamond price times quantity), rounded to 2
    /// decimal places.
    pub total: f64,
    /// Echo of the input attributes.
    pub details: GroupDetails,
}

/// Response for a pricing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Per-group results, in request order.
    pub results: Vec<GroupResult>,
    /// Sum of all group totals, rounded to 2 decimal places.
    pub grand_total: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_deserializes_from_wire_format() {
        let request: CalculationRequest = serde_json::from_value(json!({
            "groups": [{
                "carat": 1.5,
                "quantity": 4,
                "cut": "very-good",
                "color": "E",
                "clarity": "IF",
                "certification": "AGS"
            }]
        }))
        .unwrap();

        let group = &request.groups[0];
        assert_eq!(group.carat, 1.5);
        assert_eq!(group.quantity, 4);
        assert_eq!(group.cut, "very-good");
        assert_eq!(group.color, "E");
        assert_eq!(group.clarity, "IF");
        assert_eq!(group.certification, "AGS");
    }

    #[test]
    fn test_negative_quantity_fails_deserialization() {
        let result: Result<DiamondGroup, _> = serde_json::from_value(json!({
            "carat": 1.0,
            "quantity": -2,
            "cut": "fair",
            "color": "J",
            "clarity": "SI1",
            "certification": "uncertified"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_response_serializes_to_wire_format() {
        let group = DiamondGroup {
            carat: 1.0,
            quantity: 2,
            cut: "excellent".to_string(),
            color: "D".to_string(),
            clarity: "FL".to_string(),
            certification: "GIA".to_string(),
        };
        let response = CalculationResponse {
            results: vec![GroupResult {
                group_id: 1,
                per_diamond: 10647.0,
                total: 21294.0,
                details: GroupDetails::from(&group),
            }],
            grand_total: 21294.0,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["grand_total"], 21294.0);
        assert_eq!(value["results"][0]["group_id"], 1);
        assert_eq!(value["results"][0]["per_diamond"], 10647.0);
        assert_eq!(value["results"][0]["details"]["cut"], "excellent");
        assert_eq!(value["results"][0]["details"]["quantity"], 2);
    }
}
