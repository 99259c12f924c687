//! Property-based invariant tests for the survey model.
//!
//! 1. An empty patch returns a survey equal to the input
//! 2. Patched fields take the new value; everything else is untouched
//! 3. Out-of-range indices always fail with IndexOutOfRange
//! 4. Mapped responses always have one entry per question
//! 5. Localized lookups fall back to the base language
//! 6. Styling normalization is idempotent on its own output

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use survey_workflow::i18n::resolve;
use survey_workflow::responses::map_response;
use survey_workflow::styling::{apply_styling_migration, normalize_styling};
use survey_workflow::survey::{update_question, QuestionPatch, RatingPatch};
use survey_workflow::{
    LegacyProduct, LocalizedString, ModeColor, Question, QuestionKind, RatingQuestion, Response,
    StylingConfig, Survey, SurveyError,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn localized() -> impl Strategy<Value = LocalizedString> {
    prop::collection::btree_map("(en|de|fr)", "[a-zA-Z ?]{0,12}", 0..3)
        .prop_map(|m| m.into_iter().collect::<LocalizedString>())
}

fn question() -> impl Strategy<Value = Question> {
    (
        "q[0-9]{1,3}",
        localized(),
        any::<bool>(),
        prop_oneof![Just(3u8), Just(4u8), Just(5u8), Just(7u8), Just(10u8)],
        any::<bool>(),
    )
        .prop_map(|(id, headline, required, range, is_rating)| Question {
            id,
            headline,
            required,
            kind: if is_rating {
                QuestionKind::Rating(RatingQuestion {
                    range,
                    ..RatingQuestion::default()
                })
            } else {
                QuestionKind::OpenText
            },
        })
}

fn survey() -> impl Strategy<Value = Survey> {
    prop::collection::vec(question(), 0..6).prop_map(|questions| {
        let mut survey = Survey::new("s1", "Generated");
        survey.questions = questions;
        survey
    })
}

fn answer() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn response(data: BTreeMap<String, Value>) -> Response {
    Response {
        id: "r1".to_string(),
        survey_id: None,
        data,
        person: None,
        updated_at: "2024-03-08T06:39:37Z".parse().expect("timestamp"),
    }
}

fn optional_color() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("#64748b".to_string()),
        Just(String::new()),
        "#[0-9a-f]{6}",
    ])
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. update_question
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_patch_is_identity(s in survey(), idx in 0usize..6) {
        prop_assume!(idx < s.questions.len());
        let next = update_question(&s, idx, &QuestionPatch::default()).expect("update");
        prop_assert_eq!(next, s);
    }

    #[test]
    fn patch_replaces_named_fields_only(
        s in survey(),
        idx in 0usize..6,
        headline in localized(),
        required in any::<bool>(),
    ) {
        prop_assume!(idx < s.questions.len());
        let patch = QuestionPatch {
            headline: Some(headline.clone()),
            required: Some(required),
            ..QuestionPatch::default()
        };
        let next = update_question(&s, idx, &patch).expect("update");
        prop_assert_eq!(&next.questions[idx].headline, &headline);
        prop_assert_eq!(next.questions[idx].required, required);
        prop_assert_eq!(&next.questions[idx].id, &s.questions[idx].id);
        prop_assert_eq!(&next.questions[idx].kind, &s.questions[idx].kind);
        for (i, q) in s.questions.iter().enumerate() {
            if i != idx {
                prop_assert_eq!(&next.questions[i], q);
            }
        }
    }

    #[test]
    fn rating_patch_keeps_unnamed_rating_fields(s in survey(), range in 0u8..12) {
        for (idx, q) in s.questions.iter().enumerate() {
            if let QuestionKind::Rating(before) = &q.kind {
                let patch = QuestionPatch::rating(RatingPatch {
                    range: Some(range),
                    ..RatingPatch::default()
                });
                let next = update_question(&s, idx, &patch).expect("update");
                match &next.questions[idx].kind {
                    QuestionKind::Rating(after) => {
                        prop_assert_eq!(after.range, range);
                        prop_assert_eq!(after.scale, before.scale);
                        prop_assert_eq!(&after.subheader, &before.subheader);
                    }
                    other => prop_assert!(false, "variant changed to {:?}", other),
                }
            }
        }
    }

    #[test]
    fn out_of_range_index_always_fails(s in survey(), extra in 0usize..100) {
        let idx = s.questions.len() + extra;
        let result = update_question(&s, idx, &QuestionPatch::default());
        let len = s.questions.len();
        let is_out_of_range = matches!(
            result,
            Err(SurveyError::IndexOutOfRange { index, len: reported }) if index == idx && reported == len
        );
        prop_assert!(is_out_of_range);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. map_response and resolve
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mapped_length_matches_question_count(
        s in survey(),
        data in prop::collection::btree_map("q[0-9]{1,3}|x[a-z]{1,4}", answer(), 0..8),
    ) {
        let out = map_response(&s, &response(data));
        prop_assert_eq!(out.len(), s.questions.len());
    }

    #[test]
    fn unanswered_questions_map_to_empty(s in survey()) {
        let out = map_response(&s, &response(BTreeMap::new()));
        prop_assert!(out.iter().all(|qa| qa.answer.is_empty()));
    }

    #[test]
    fn resolve_falls_back_to_base(text in "[a-zA-Z]{1,10}", code in "(de|fr|es)") {
        let field = LocalizedString::single("en", text.clone());
        prop_assert_eq!(resolve(&field, &code, "en"), text);
    }
}

#[test]
fn maps_documented_example() {
    let mut s = Survey::new("s1", "Example");
    s.questions = vec![
        Question {
            id: "q1".to_string(),
            headline: LocalizedString::single("en", "Name?"),
            required: false,
            kind: QuestionKind::OpenText,
        },
        Question {
            id: "q2".to_string(),
            headline: LocalizedString::single("en", "Age?"),
            required: false,
            kind: QuestionKind::OpenText,
        },
    ];
    let data = serde_json::from_value(json!({"q1": "Alice", "q3": "ignored"})).expect("data");
    let out = map_response(&s, &response(data));
    let pairs = out
        .iter()
        .map(|qa| (qa.question.as_str(), qa.answer.as_str()))
        .collect::<Vec<(&str, &str)>>();
    assert_eq!(pairs, vec![("Name?", "Alice"), ("Age?", "")]);
}

// ═════════════════════════════════════════════════════════════════════════
// 6. normalize_styling
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalization_is_idempotent(
        brand in optional_color(),
        highlight in optional_color(),
        has_styling in any::<bool>(),
    ) {
        let product = LegacyProduct {
            id: "p1".to_string(),
            brand_color: brand,
            highlight_border_color: highlight,
            styling: has_styling.then(|| StylingConfig {
                unified_styling: true,
                allow_style_overwrite: false,
                brand_color: None,
                highlight_border_color: None,
                background: None,
                extra: Default::default(),
            }),
            extra: Default::default(),
        };
        let first = normalize_styling(&product);
        let migrated = apply_styling_migration(&product, &first);
        if first.changed {
            prop_assert!(migrated.brand_color.is_none());
            prop_assert_eq!(&migrated.styling, &first.new_styling);
        } else {
            prop_assert_eq!(&migrated, &product);
        }
        let second = normalize_styling(&migrated);
        prop_assert!(!second.changed);
        prop_assert_eq!(apply_styling_migration(&migrated, &second), migrated);
    }
}

#[test]
fn documented_styling_examples() {
    let custom = LegacyProduct {
        id: "p1".to_string(),
        brand_color: Some("#ff0000".to_string()),
        highlight_border_color: None,
        styling: None,
        extra: Default::default(),
    };
    let out = normalize_styling(&custom);
    assert!(out.changed);
    assert!(out.clear_legacy_brand_color);
    let styling = out.new_styling.expect("styling");
    assert!(!styling.unified_styling);
    assert!(styling.allow_style_overwrite);
    assert_eq!(styling.brand_color, Some(ModeColor::light("#ff0000")));
    assert_eq!(styling.highlight_border_color, None);

    let factory = LegacyProduct {
        id: "p2".to_string(),
        brand_color: Some("#64748b".to_string()),
        highlight_border_color: None,
        styling: Some(StylingConfig {
            unified_styling: true,
            allow_style_overwrite: false,
            brand_color: None,
            highlight_border_color: None,
            background: None,
            extra: Default::default(),
        }),
        extra: Default::default(),
    };
    assert!(!normalize_styling(&factory).changed);
}
