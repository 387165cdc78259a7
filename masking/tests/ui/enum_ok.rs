use masking::{FieldFilter, Maskable, MaskingSession};

#[derive(Clone, Debug, PartialEq, Maskable)]
enum Credential {
    Password {
        #[mask(rename = "secret")]
        value: String,
    },
    Token(String, #[mask(keep)] u64),
    Anonymous,
}

#[derive(Clone, Debug, Default, PartialEq, Maskable)]
enum Level {
    High(u8),
    #[default]
    Low,
}

fn main() {
    let session = MaskingSession::new([FieldFilter::new("secret"), FieldFilter::new("0")]);
    let masked = session.mask_details(&Credential::Password {
        value: "pw".to_owned(),
    });
    assert_eq!(
        masked,
        Credential::Password {
            value: "[filtered]".to_owned()
        }
    );
    assert_eq!(
        session.mask_details(&Credential::Token("t".to_owned(), 3)),
        Credential::Token("[filtered]".to_owned(), 3)
    );
    assert_eq!(session.mask_details(&Credential::Anonymous), Credential::Anonymous);
    assert_eq!(session.mask_details(&Level::High(3)), Level::High(0));
    assert_eq!(session.mask_details(&Level::Low), Level::Low);
}
