use crate::shared::api_utils::api_base;
use contracts::domain::a005_purchase::aggregate::{Purchase, PurchaseDto};
use gloo_net::http::Request;

pub async fn fetch_by_id(id: String) -> Result<Purchase, String> {
    let url = format!("{}/api/a005/purchase/{}", api_base(), id);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch purchase: {}", response.status()));
    }

    response
        .json::<Purchase>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать (POST) или обновить (PUT) документ. Возвращает id
pub async fn save_form(dto: &PurchaseDto) -> Result<String, String> {
    let request = match &dto.id {
        Some(id) => Request::put(&format!("{}/api/a005/purchase/{}", api_base(), id)),
        None => Request::post(&format!("{}/api/a005/purchase", api_base())),
    };

    let response = request
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save purchase: {}", response.status()));
    }

    if let Some(id) = &dto.id {
        return Ok(id.clone());
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    created_id(&result)
}

/// id созданного документа из ответа POST
fn created_id(result: &serde_json::Value) -> Result<String, String> {
    match result["id"].as_str().map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err("В ответе нет id документа".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_id() {
        assert_eq!(
            created_id(&json!({ "id": "0b6f3c1e-1d2a-4f6b-9d1e-2a3b4c5d6e7f" })),
            Ok("0b6f3c1e-1d2a-4f6b-9d1e-2a3b4c5d6e7f".to_string())
        );
    }

    #[test]
    fn test_created_id_missing_or_blank() {
        let expected = Err("В ответе нет id документа".to_string());
        assert_eq!(created_id(&json!({})), expected);
        assert_eq!(created_id(&json!({ "id": "" })), expected);
        assert_eq!(created_id(&json!({ "id": "  " })), expected);
        assert_eq!(created_id(&json!({ "id": 42 })), expected);
        assert_eq!(created_id(&json!(null)), expected);
    }
}
