use masking::{FieldFilter, Maskable, MaskingSession};

#[derive(Clone, Debug, Maskable)]
struct Contact {
    #[mask(rename = "Email")]
    #[tag(mask = "email", log = "secret")]
    email: String,
    #[tag(mask = "mobile")]
    phone: Option<String>,
}

fn main() {
    let session = MaskingSession::new([FieldFilter::new("Email")]);
    let masked = session.mask_details(&Contact {
        email: "a@b.c".to_owned(),
        phone: None,
    });
    assert_eq!(masked.email, "[filtered]");
}
