//! End-to-end tests for the public masking API.
//!
//! These tests exercise the integration of:
//! - `Maskable` derive traversal and its field attributes,
//! - session configuration and filter chains, and
//! - user-defined filters and hand-written `Maskable` impls.

use std::{
    collections::BTreeMap,
    marker::PhantomData,
    sync::{Arc, Mutex},
    thread,
};

use masking::{
    FieldFilter, Filter, FilterChain, MaskKind, MaskStyle, Maskable, MaskedOutput, MaskingConfig,
    MaskingSession, Shape, Site, TagFilter, TypeFilter, ValueFilter, Walker,
};

#[test]
fn doc_example_masks_email() {
    #[derive(Clone, Debug, Maskable)]
    struct User {
        name: String,
        email: String,
    }

    let session = MaskingSession::new([FieldFilter::with_kind("email", MaskKind::Email)]);
    let masked = session.mask_details(&User {
        name: "ggwhite".to_owned(),
        email: "ggwhite@gmail.com".to_owned(),
    });
    assert_eq!(masked.name, "ggwhite");
    assert_eq!(masked.email, "ggw****@gmail.com");
}

mod derive_attributes {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Foreign(u64);

    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Request {
        #[mask(rename = "Authorization")]
        auth: String,
        #[mask(keep)]
        foreign: Foreign,
        #[mask(keep)]
        raw_body: String,
        #[mask(skip)]
        cache: Vec<String>,
        body: String,
    }

    fn request() -> Request {
        Request {
            auth: "Bearer abc".to_owned(),
            foreign: Foreign(7),
            raw_body: "token".to_owned(),
            cache: vec!["token".to_owned()],
            body: "token".to_owned(),
        }
    }

    #[test]
    fn rename_is_the_name_filters_see() {
        let session = MaskingSession::new([FieldFilter::new("Authorization")]);
        assert_eq!(session.mask_details(&request()).auth, "[filtered]");

        let session = MaskingSession::new([FieldFilter::new("auth")]);
        assert_eq!(session.mask_details(&request()).auth, "Bearer abc");
    }

    #[test]
    fn keep_copies_and_skip_defaults() {
        let session = MaskingSession::new([ValueFilter::new("token")]);
        let masked = session.mask_details(&request());
        assert_eq!(masked.foreign, Foreign(7));
        assert_eq!(masked.raw_body, "token");
        assert!(masked.cache.is_empty());
        assert_eq!(masked.body, "[filtered]");
    }

    #[test]
    fn kept_fields_are_hidden_from_field_filters() {
        let session = MaskingSession::new([FieldFilter::new("raw_body")]);
        assert_eq!(session.mask_details(&request()).raw_body, "token");
    }

    #[test]
    fn tuple_fields_are_named_by_position() {
        #[derive(Clone, Debug, Maskable)]
        struct Pair(String, String);

        let session = MaskingSession::new([FieldFilter::new("1")]);
        let masked = session.mask_details(&Pair("left".to_owned(), "right".to_owned()));
        assert_eq!(masked.0, "left");
        assert_eq!(masked.1, "[filtered]");
    }

    #[test]
    fn raw_identifiers_are_unprefixed() {
        #[derive(Clone, Debug, Maskable)]
        struct Kind {
            r#type: String,
        }

        let session = MaskingSession::new([FieldFilter::new("type")]);
        let masked = session.mask_details(&Kind {
            r#type: "admin".to_owned(),
        });
        assert_eq!(masked.r#type, "[filtered]");
    }

    #[test]
    fn unit_structs_walk() {
        #[derive(Clone, Debug, PartialEq, Maskable)]
        struct Marker;

        let session = MaskingSession::new([ValueFilter::new("x")]);
        assert_eq!(session.mask_details(&Marker), Marker);
    }
}

mod enums {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Maskable)]
    enum Contact {
        Email {
            #[tag(mask = "email")]
            address: String,
        },
        Phone(#[tag(mask = "mobile")] String),
        Unknown,
    }

    #[derive(Clone, Debug, Default, PartialEq, Maskable)]
    enum Status {
        Active(String),
        #[default]
        Idle,
    }

    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Person {
        contact: Contact,
        status: Status,
    }

    #[test]
    fn variant_fields_are_visited() {
        let session = MaskingSession::new([TagFilter::new([MaskKind::Email, MaskKind::Mobile])]);

        let email = Contact::Email {
            address: "dummy@dummy.com".to_owned(),
        };
        assert_eq!(
            session.mask_details(&email),
            Contact::Email {
                address: "dum****@dummy.com".to_owned()
            }
        );

        let phone = Contact::Phone("9191919191".to_owned());
        assert_eq!(
            session.mask_details(&phone),
            Contact::Phone("9191***191".to_owned())
        );

        assert_eq!(session.mask_details(&Contact::Unknown), Contact::Unknown);
    }

    #[test]
    fn matched_enums_become_their_zero_value() {
        let session = MaskingSession::new([
            FieldFilter::new("contact"),
            FieldFilter::new("status"),
        ]);
        let masked = session.mask_details(&Person {
            contact: Contact::Phone("9191919191".to_owned()),
            status: Status::Active("yes".to_owned()),
        });
        assert_eq!(
            masked.contact,
            Contact::Email {
                address: String::new()
            }
        );
        assert_eq!(masked.status, Status::Idle);
    }
}

mod generics {
    use super::*;

    #[derive(Clone, Debug, Maskable)]
    struct Envelope<T> {
        id: String,
        payload: T,
    }

    #[derive(Clone, Debug, Maskable)]
    struct TypedId<T> {
        id: String,
        _marker: PhantomData<T>,
    }

    #[derive(Clone, Debug, Maskable)]
    struct Pinned<const N: usize> {
        codes: [String; N],
    }

    #[test]
    fn generic_payloads_are_walked() {
        let session = MaskingSession::new([FieldFilter::with_kind("payload", MaskKind::Password)]);
        let masked = session.mask_details(&Envelope {
            id: "1".to_owned(),
            payload: "hunter2".to_owned(),
        });
        assert_eq!(masked.payload, "************");

        let masked = session.mask_details(&Envelope {
            id: "2".to_owned(),
            payload: vec![1_u8, 2, 3],
        });
        assert!(masked.payload.is_empty());
    }

    #[test]
    fn phantom_parameters_need_no_bounds() {
        let session = MaskingSession::new([ValueFilter::new("42")]);
        let masked = session.mask_details(&TypedId::<std::time::Instant> {
            id: "42".to_owned(),
            _marker: PhantomData,
        });
        assert_eq!(masked.id, "[filtered]");
    }

    #[test]
    fn const_generic_arrays() {
        let session = MaskingSession::new([ValueFilter::new("1234")]);
        let masked = session.mask_details(&Pinned {
            codes: ["1234".to_owned(), "5678".to_owned()],
        });
        assert_eq!(masked.codes, ["[filtered]", "5678"]);
    }
}

mod sessions {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Secret {
        owner: String,
        token: String,
    }

    fn secret() -> Secret {
        Secret {
            owner: "ggwhite".to_owned(),
            token: "abcd1234".to_owned(),
        }
    }

    #[test]
    fn first_matching_filter_wins() {
        let chain = FilterChain::new()
            .with(FieldFilter::with_kind("token", MaskKind::Password))
            .with(FieldFilter::new("token"));
        let session = MaskingSession::from(chain);
        assert_eq!(session.mask_details(&secret()).token, "************");
    }

    #[test]
    fn content_filters_all_apply_in_order() {
        let chain = FilterChain::new()
            .with(ValueFilter::new("abcd"))
            .with(ValueFilter::with_kind("1234", MaskKind::Password));
        let session = MaskingSession::from(chain);
        assert_eq!(
            session.mask_details(&secret()).token,
            "[filtered]************"
        );
    }

    #[test]
    fn boxed_filters_mix_kinds() {
        let filters: Vec<Box<dyn Filter>> = vec![
            Box::new(TypeFilter::of::<u32>()),
            Box::new(ValueFilter::new("ggwhite")),
        ];
        let session = MaskingSession::new(filters);
        assert_eq!(session.mask_details(&secret()).owner, "[filtered]");
        assert_eq!(session.filters().len(), 2);
    }

    #[test]
    fn config_drives_the_style() {
        let config = MaskingConfig::default()
            .with_mask_char('#')
            .with_placeholder("<redacted>")
            .with_tag_key("log");
        let chain = FilterChain::new()
            .with(FieldFilter::with_kind("token", MaskKind::Mobile))
            .with(FieldFilter::new("owner"));
        let session = MaskingSession::with_config(chain, config);

        let masked = session.mask_details(&secret());
        assert_eq!(masked.token, "abcd###4");
        assert_eq!(masked.owner, "<redacted>");
        assert_eq!(session.tag_key(), "log");
    }

    #[test]
    fn shared_across_threads() {
        let session = Arc::new(MaskingSession::new([FieldFilter::new("token")]));
        let results = Arc::new(Mutex::new(Vec::new()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let session = Arc::clone(&session);
                let results = Arc::clone(&results);
                thread::spawn(move || {
                    let masked = session.mask_details(&secret());
                    results.lock().unwrap().push(masked.token);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let results = results.lock().unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|token| token == "[filtered]"));
    }

    #[test]
    fn masked_output_renders_debug() {
        let session = MaskingSession::new([FieldFilter::new("token")]);
        let output = session.masked_output(&secret());
        assert_eq!(
            output,
            MaskedOutput::Text(r#"Secret { owner: "ggwhite", token: "[filtered]" }"#.to_owned())
        );
        assert_eq!(
            output.to_string(),
            r#"Secret { owner: "ggwhite", token: "[filtered]" }"#
        );
    }
}

mod extension_points {
    use super::*;

    /// Masks every field whose name ends with `_key`.
    #[derive(Debug)]
    struct SuffixFilter;

    impl Filter for SuffixFilter {
        fn should_mask(&self, site: &Site<'_>) -> bool {
            site.field().ends_with("_key")
        }

        fn mask_string(&self, _site: &Site<'_>, value: &str, style: &MaskStyle) -> String {
            format!("{}…", value.chars().next().unwrap_or(style.mask_char()))
        }
    }

    #[derive(Clone, Debug, Maskable)]
    struct Keys {
        api_key: String,
        name: String,
    }

    #[test]
    fn custom_filters_plug_into_the_chain() {
        let session = MaskingSession::new([SuffixFilter]);
        let masked = session.mask_details(&Keys {
            api_key: "sk_live".to_owned(),
            name: "prod".to_owned(),
        });
        assert_eq!(masked.api_key, "s…");
        assert_eq!(masked.name, "prod");
    }

    /// A hand-written impl that exposes its entries as fields.
    #[derive(Clone, Debug, PartialEq)]
    struct Headers(Vec<(String, String)>);

    impl Maskable for Headers {
        const SHAPE: Shape = Shape::Map;

        fn zeroed() -> Self {
            Self(Vec::new())
        }

        fn walk(&self, walker: &Walker<'_>, _field: &str, _tag: &str) -> Self {
            Self(
                self.0
                    .iter()
                    .map(|(name, value)| (name.clone(), walker.visit(name, value, "")))
                    .collect(),
            )
        }
    }

    #[test]
    fn hand_written_impls_use_the_walker() {
        let session = MaskingSession::new([FieldFilter::new("cookie")]);
        let headers = Headers(vec![
            ("host".to_owned(), "example.com".to_owned()),
            ("cookie".to_owned(), "session=1".to_owned()),
        ]);
        let masked = session.mask_details(&headers);
        assert_eq!(
            masked,
            Headers(vec![
                ("host".to_owned(), "example.com".to_owned()),
                ("cookie".to_owned(), "[filtered]".to_owned()),
            ])
        );
    }

    #[test]
    fn ordered_maps_keep_their_order() {
        let session = MaskingSession::new([FieldFilter::new("b")]);
        let map = BTreeMap::from([
            ("a".to_owned(), "1".to_owned()),
            ("b".to_owned(), "2".to_owned()),
        ]);
        let masked: Vec<_> = session.mask_details(&map).into_iter().collect();
        assert_eq!(
            masked,
            [
                ("a".to_owned(), "1".to_owned()),
                ("b".to_owned(), "[filtered]".to_owned())
            ]
        );
    }
}
