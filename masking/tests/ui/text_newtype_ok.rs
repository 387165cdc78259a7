use masking::{MaskKind, Maskable, MaskingSession, TypeFilter};

#[derive(Clone, Debug, PartialEq, Maskable)]
#[mask(text)]
struct Password(String);

#[derive(Clone, Debug, PartialEq, Maskable)]
#[mask(text)]
struct Email {
    address: Box<str>,
}

fn main() {
    let session = MaskingSession::new([TypeFilter::with_kind::<Password>(MaskKind::Password)]);
    assert_eq!(
        session.mask_details(&Password("hunter2".to_owned())),
        Password("************".to_owned())
    );

    let session = MaskingSession::new([TypeFilter::with_kind::<Email>(MaskKind::Email)]);
    let masked = session.mask_details(&Email {
        address: "dummy@dummy.com".into(),
    });
    assert_eq!(&*masked.address, "dum****@dummy.com");
}
