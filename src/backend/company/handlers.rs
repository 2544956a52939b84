//! Company HTTP Handlers
//!
//! Static company information, guarded by the internal token middleware.

use axum::Json;
use serde::{Deserialize, Serialize};

pub const COMPANY_NAME: &str = "Example Company, LLC";
pub const EMPLOYEE_COUNT: u32 = 162;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompanyInfo {
    pub company_name: String,
}

/// `GET /companyapis/`
pub async fn get_company_name() -> Json<CompanyInfo> {
    Json(CompanyInfo {
        company_name: COMPANY_NAME.to_string(),
    })
}

/// `GET /companyapis/employees`
pub async fn number_of_employees() -> Json<u32> {
    Json(EMPLOYEE_COUNT)
}
