use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::BranchReport;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TICKET_BROWSE_BASE: &str = "https://cometa.atlassian.net/browse";

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE_URL}/{}:generateContent", self.model)
    }
}

#[async_trait]
impl LanguageModelService for GeminiClient {
    async fn summarize(&self, report: &BranchReport, ticket: Option<&str>) -> AppResult<String> {
        let request_body = GenerateContentRequest::new(build_prompt(report, ticket));

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::Generation(format!("failed to call Gemini: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Generation(format!(
                "Gemini responded with {status}: {body}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            AppError::Generation(format!("failed to parse Gemini response: {err}"))
        })?;

        payload
            .candidates
            .into_iter()
            .flatten()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| AppError::Generation("Gemini returned no candidates".to_string()))
    }
}

fn ticket_line(ticket: Option<&str>) -> String {
    match ticket {
        Some(key) => format!("- [{key}]({TICKET_BROWSE_BASE}/{key})"),
        None => format!("- [JIRA-NUMBER]({TICKET_BROWSE_BASE}/[JIRA-NUMBER])"),
    }
}

fn build_prompt(report: &BranchReport, ticket: Option<&str>) -> String {
    format!(
        "Actúa como un experto desarrollador revisando cambios de código. \
         Analiza los siguientes cambios de git y genera un resumen técnico y \
         preciso del Pull Request.\n\
         \n\
         Reglas importantes:\n\
         1. SOLO incluir cambios que realmente estén en el diff proporcionado\n\
         2. Ser específico sobre qué archivos y funciones se modificaron\n\
         3. Explicar el propósito técnico de cada cambio\n\
         4. Mencionar cambios en la estructura del código, refactorizaciones o nuevas funcionalidades\n\
         5. NO inventar cambios que no estén en el diff\n\
         6. Usar lenguaje técnico y preciso\n\
         7. Mantener el resumen conciso pero informativo\n\
         \n\
         El formato DEBE ser:\n\
         \n\
         ## Cambios realizados\n\
         \n\
         • [Archivo/Componente]: [Descripción técnica del cambio y su propósito]\n\
         • [Siguiente cambio significativo...]\n\
         \n\
         ## Ticket\n\
         \n\
         {ticket_section}\n\
         \n\
         Cambios a analizar:\n\
         {changes}",
        ticket_section = ticket_line(ticket),
        changes = report.render(),
    )
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

impl GenerateContentRequest {
    fn new(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BranchReport {
        BranchReport {
            branch: "feature/SIS-290-login".to_string(),
            base_branch: "master".to_string(),
            merge_base: "abc1234".to_string(),
            commits: "abc1235 - add login form".to_string(),
            files: "M\tsrc/login.rs".to_string(),
            diff: "diff --git a/src/login.rs b/src/login.rs".to_string(),
        }
    }

    #[test]
    fn prompt_embeds_report_verbatim() {
        let report = sample_report();
        let prompt = build_prompt(&report, Some("SIS-290"));
        assert!(prompt.contains(&report.render()));
        assert!(prompt.contains("## Cambios realizados"));
        assert!(prompt.contains("## Ticket"));
    }

    #[test]
    fn ticket_line_links_when_present() {
        assert_eq!(
            ticket_line(Some("SIS-290")),
            "- [SIS-290](https://cometa.atlassian.net/browse/SIS-290)"
        );
    }

    #[test]
    fn ticket_line_falls_back_to_placeholder() {
        assert_eq!(
            ticket_line(None),
            "- [JIRA-NUMBER](https://cometa.atlassian.net/browse/[JIRA-NUMBER])"
        );
    }

    #[test]
    fn request_body_uses_fixed_sampling_and_permissive_safety() {
        let request = GenerateContentRequest::new("hola".to_string());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hola");
        assert_eq!(value["generationConfig"]["temperature"], 0.3);
        assert_eq!(value["generationConfig"]["topP"], 0.8);
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 2048);

        let safety = value["safetySettings"].as_array().unwrap();
        assert_eq!(safety.len(), 4);
        assert!(
            safety
                .iter()
                .all(|setting| setting["threshold"] == "BLOCK_NONE")
        );
    }

    #[test]
    fn endpoint_targets_configured_model() {
        let client = GeminiClient::new("key".to_string(), "gemini-pro".to_string());
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }
}
