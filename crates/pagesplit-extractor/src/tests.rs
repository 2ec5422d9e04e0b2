//! End-to-end tests for the extractor: body in, response envelope out

#[cfg(test)]
mod tests {
    use crate::{decode_request, BatchProcessor, RequestError};
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn run(body: &str) -> Value {
        let request = decode_request(body.as_bytes()).unwrap();
        let response = BatchProcessor::default().process_request(&request);
        serde_json::to_value(&response).unwrap()
    }

    #[test]
    fn test_full_record() {
        let output = run(
            r#"{"values":[{"recordId":"r1","data":{"page_content":"id: 1\n\nquestion: What is 2+2?\n\nanswer: 4"}}]}"#,
        );
        assert_eq!(
            output,
            json!({"values":[{
                "recordId":"r1",
                "data":{"id":"1","question":"What is 2+2?","answer":"4"},
                "errors":[],
                "warnings":[]
            }]})
        );
    }

    #[test]
    fn test_record_without_page_content() {
        let output = run(r#"{"values":[{"data":{}}]}"#);
        assert_eq!(
            output["values"][0],
            json!({
                "recordId":"record_0",
                "data":{},
                "errors":[{"message":"page_content field is required"}],
                "warnings":[]
            })
        );
    }

    #[test]
    fn test_answer_only() {
        let output = run(r#"{"values":[{"data":{"page_content":"answer: 42"}}]}"#);
        assert_eq!(output["values"][0]["data"], json!({"answer": "42"}));
        assert_eq!(output["values"][0]["errors"], json!([]));
        assert_eq!(
            output["values"][0]["warnings"],
            json!([{"message": "question field not found in page_content"}])
        );
    }

    #[test]
    fn test_values_not_a_list_rejects_request() {
        let err = decode_request(br#"{"values": "not-a-list"}"#).unwrap_err();
        assert!(matches!(err, RequestError::InvalidFormat));
    }

    #[test]
    fn test_mixed_batch() {
        let output = run(
            r#"{"values":[
                {"recordId":"ok","data":{"page_content":"question: Q\n\nanswer: A"}},
                {"recordId":"bad","data":{"page_content":12}},
                {"data":{"page_content":"id: x"}}
            ]}"#,
        );
        let values = output["values"].as_array().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["data"], json!({"question":"Q","answer":"A"}));
        assert_eq!(values[1]["recordId"], "bad");
        assert_eq!(values[1]["errors"][0]["message"], "page_content field must be a string");
        assert_eq!(values[2]["recordId"], "record_2");
        assert_eq!(values[2]["data"], json!({"id":"x"}));
        assert_eq!(values[2]["warnings"].as_array().unwrap().len(), 2);
    }

    /// A batch entry: either a well-formed record with generated content or
    /// one of a handful of malformed shapes.
    fn record_strategy() -> impl Strategy<Value = Value> {
        let content = prop::collection::vec(
            prop_oneof![
                Just("id: ".to_string()),
                Just("question: ".to_string()),
                Just("answer: ".to_string()),
                Just("\n\n".to_string()),
                Just("\n".to_string()),
                "[a-zA-Z0-9 ?:é]{0,12}",
            ],
            0..12,
        )
        .prop_map(|parts| parts.concat());

        prop_oneof![
            (proptest::option::of("[a-z0-9]{0,6}"), content).prop_map(|(id, content)| {
                match id {
                    Some(id) => json!({"recordId": id, "data": {"page_content": content}}),
                    None => json!({"data": {"page_content": content}}),
                }
            }),
            Just(json!({})),
            Just(json!(7)),
            Just(json!({"data": {"page_content": false}})),
        ]
    }

    proptest! {
        #[test]
        fn prop_one_output_per_input_in_order(records in prop::collection::vec(record_strategy(), 1..20)) {
            let response = BatchProcessor::default().process_batch(&records);
            prop_assert_eq!(response.values.len(), records.len());

            for (index, (input, output)) in records.iter().zip(&response.values).enumerate() {
                let expected = match input.get("recordId").and_then(Value::as_str) {
                    Some(id) if !id.is_empty() => id.to_string(),
                    _ => format!("record_{}", index),
                };
                prop_assert_eq!(output.record_id(), expected.as_str());
            }
        }

        #[test]
        fn prop_processing_is_deterministic(records in prop::collection::vec(record_strategy(), 1..10)) {
            let processor = BatchProcessor::default();
            let first = serde_json::to_vec(&processor.process_batch(&records)).unwrap();
            let second = serde_json::to_vec(&processor.process_batch(&records)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_errors_exclude_data_and_warnings(records in prop::collection::vec(record_strategy(), 1..20)) {
            let response = BatchProcessor::default().process_batch(&records);
            for record in &response.values {
                if record.is_failure() {
                    prop_assert!(record.data().is_empty());
                    prop_assert!(record.warnings().is_empty());
                    prop_assert_eq!(record.errors().len(), 1);
                }
            }
        }

        #[test]
        fn prop_missing_question_always_warns(content in "[a-z \n]{1,40}") {
            prop_assume!(!content.contains("question:"));
            let record = json!({"data": {"page_content": content}});
            let output = BatchProcessor::default().process_record(&record, 0);
            prop_assert!(output.data().question.is_none());
            prop_assert!(output
                .warnings()
                .iter()
                .any(|w| w.message == "question field not found in page_content"));
        }
    }
}
