use std::{collections::HashMap, marker::PhantomData};

use masking::{Maskable, MaskingSession, ValueFilter};

#[derive(Clone, Debug, Maskable)]
struct Page<T, M>
where
    T: Clone,
{
    items: Vec<T>,
    meta: HashMap<String, M>,
    #[mask(keep)]
    cursor: Option<u64>,
    _marker: PhantomData<fn() -> T>,
}

#[derive(Clone, Debug, Maskable)]
struct Fixed<const N: usize>([String; N]);

fn main() {
    let session = MaskingSession::new([ValueFilter::new("x")]);
    let page = Page::<String, u8> {
        items: vec!["x".to_owned()],
        meta: HashMap::new(),
        cursor: Some(1),
        _marker: PhantomData,
    };
    let masked = session.mask_details(&page);
    assert_eq!(masked.items, ["[filtered]"]);
    assert_eq!(masked.cursor, Some(1));

    let fixed = session.mask_details(&Fixed(["x".to_owned()]));
    assert_eq!(fixed.0, ["[filtered]"]);
}
