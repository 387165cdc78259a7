use std::time::Instant;

use masking::{Maskable, MaskingSession, ValueFilter};

#[derive(Clone, Debug, Default)]
struct External {
    id: u64,
}

#[derive(Clone, Debug, Maskable)]
struct Job {
    name: String,
    #[mask(keep)]
    external: External,
    #[mask(skip)]
    started: Option<Instant>,
}

fn main() {
    let session = MaskingSession::new([ValueFilter::new("nightly")]);
    let masked = session.mask_details(&Job {
        name: "nightly".to_owned(),
        external: External { id: 9 },
        started: Some(Instant::now()),
    });
    assert_eq!(masked.name, "[filtered]");
    assert_eq!(masked.external.id, 9);
    assert!(masked.started.is_none());
}
