use board_api::domain::{
    shared::pagination::{PageRequest, PagedResponse},
    user::value_objects::Nickname,
};

#[test]
fn nickname_accepts_reasonable_names() {
    assert!(Nickname::new("alice".to_string()).is_ok());
    assert!(Nickname::new("user_42".to_string()).is_ok());
    assert!(Nickname::new("홍길동".to_string()).is_ok());
}

#[test]
fn nickname_enforces_length_bounds() {
    assert!(Nickname::new("a".to_string()).is_err());
    assert!(Nickname::new("a".repeat(21)).is_err());
    assert!(Nickname::new("ab".to_string()).is_ok());
    assert!(Nickname::new("a".repeat(20)).is_ok());
}

#[test]
fn nickname_rejects_whitespace_and_symbols() {
    assert!(Nickname::new("two words".to_string()).is_err());
    assert!(Nickname::new("bad!name".to_string()).is_err());
}

#[test]
fn page_request_defaults_to_first_page() {
    let p = PageRequest::default();
    assert_eq!(p.page, 1);
    assert_eq!(p.offset(10), 0);
}

#[test]
fn page_request_offset_scales_with_page_size() {
    let p = PageRequest { page: 3 };
    assert_eq!(p.offset(10), 20);
    assert_eq!(p.offset(25), 50);
}

#[test]
fn paged_response_computes_page_math() {
    let page = PagedResponse::new(vec![1, 2, 3], 1, 10, 23);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, 23);
    assert!(page.has_next);
    assert!(!page.has_previous);

    let page = PagedResponse::new(vec![1], 3, 10, 23);
    assert!(!page.has_next);
    assert!(page.has_previous);
}

#[test]
fn paged_response_handles_empty_listings() {
    let page = PagedResponse::<i32>::new(vec![], 1, 10, 0);
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_next);
    assert!(!page.has_previous);
}
