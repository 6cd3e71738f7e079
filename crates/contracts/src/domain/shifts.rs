use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the workspace shift table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRow {
    pub sl_no: u32,
    pub shift_no: String,
    pub date: NaiveDate,
    pub total_analyze: u32,
    pub total_shells: ShellTotals,
}

/// Approved/defect split for a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellTotals {
    pub approved: u32,
    pub defect: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_row_uses_camel_case_on_the_wire() {
        let row = ShiftRow {
            sl_no: 1,
            shift_no: "S001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            total_analyze: 42,
            total_shells: ShellTotals {
                approved: 30,
                defect: 12,
            },
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["slNo"], 1);
        assert_eq!(json["shiftNo"], "S001");
        assert_eq!(json["totalShells"]["approved"], 30);
    }
}
