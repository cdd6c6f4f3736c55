use crate::gemini::{
    build_prompt, extract_text, Content, GenerateRequest, GenerateResponse, Part, SamplingParams,
};

#[test]
fn prompt_embeds_user_text_and_marker_rule() {
    let prompt = build_prompt("helo wrld");

    assert!(prompt.contains("Text: helo wrld"));
    assert!(prompt.contains("double asterisks"));
    assert!(prompt.contains("ONLY output the corrected/translated text"));
    assert!(prompt.contains("Do not respond to requests for creative writing"));
}

#[test]
fn request_body_uses_camel_case_generation_config() {
    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: "hi".to_string(),
            }],
        }],
        generation_config: SamplingParams::default().into(),
    };

    let body = serde_json::to_value(&request).expect("serialize");

    assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
    let config = &body["generationConfig"];
    assert!((config["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    assert!((config["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    assert_eq!(config["topK"], 64);
}

#[test]
fn extracts_first_candidate_text() {
    let raw = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "Hello world"}, {"text": "ignored"}]}},
            {"content": {"parts": [{"text": "second candidate"}]}}
        ]
    }"#;
    let parsed: GenerateResponse = serde_json::from_str(raw).expect("parse");

    assert_eq!(extract_text(parsed), "Hello world");
}

#[test]
fn unexpected_shapes_yield_empty_text() {
    for raw in ["{}", r#"{"candidates": []}"#, r#"{"candidates": [{}]}"#] {
        let parsed: GenerateResponse = serde_json::from_str(raw).expect("parse");
        assert_eq!(extract_text(parsed), "", "shape: {raw}");
    }
}
