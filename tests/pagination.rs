use game_storefront_api::{
    response::Meta,
    routes::params::{MAX_PAGE_LINKS, PageSlot, Pagination, page_window},
};

use PageSlot::{Ellipsis, Page};

#[test]
fn few_pages_are_all_listed() {
    assert!(page_window(1, 0).is_empty());
    assert_eq!(page_window(1, 1), vec![Page(1)]);
    assert_eq!(
        page_window(2, MAX_PAGE_LINKS),
        (1..=MAX_PAGE_LINKS).map(Page).collect::<Vec<_>>()
    );
}

#[test]
fn window_near_the_start() {
    assert_eq!(
        page_window(1, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
    );
    assert_eq!(
        page_window(3, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
    );
}

#[test]
fn window_in_the_middle() {
    assert_eq!(
        page_window(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}

#[test]
fn window_near_the_end() {
    assert_eq!(
        page_window(10, 10),
        vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
    );
    assert_eq!(
        page_window(8, 10),
        vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
    );
}

#[test]
fn pagination_defaults_and_clamps() {
    assert_eq!(Pagination::default().normalize(), (1, 20, 0));
    let odd = Pagination {
        page: Some(-3),
        per_page: Some(1000),
    };
    assert_eq!(odd.normalize(), (1, 100, 0));
}

#[test]
fn apply_slices_the_requested_page() {
    let pagination = Pagination {
        page: Some(3),
        per_page: Some(4),
    };
    let (items, page, per_page, total) = pagination.apply((1..=10).collect::<Vec<i32>>());
    assert_eq!(items, vec![9, 10]);
    assert_eq!((page, per_page, total), (3, 4, 10));

    let beyond = Pagination {
        page: Some(9),
        per_page: Some(4),
    };
    assert!(beyond.apply(vec![1, 2, 3]).0.is_empty());
}

#[test]
fn meta_carries_page_window() {
    let meta = Meta::with_window(2, 20, 41);
    assert_eq!(meta.total_pages, Some(3));
    assert_eq!(meta.pages, Some(vec![Page(1), Page(2), Page(3)]));

    let empty = Meta::with_window(1, 20, 0);
    assert_eq!(empty.total_pages, Some(0));
    assert_eq!(empty.pages, Some(Vec::new()));
}

#[test]
fn huge_page_numbers_do_not_overflow() {
    let pagination = Pagination {
        page: Some(i64::MAX),
        per_page: Some(20),
    };
    let (page, per_page, offset) = pagination.normalize();
    assert_eq!((page, per_page, offset), (i64::MAX, 20, i64::MAX));

    let (items, page, _, total) = pagination.apply(vec![1, 2, 3]);
    assert!(items.is_empty());
    assert_eq!((page, total), (i64::MAX, 3));

    let meta = Meta::with_window(i64::MAX, 20, 41);
    assert_eq!(meta.total_pages, Some(3));
    assert_eq!(meta.pages, Some(vec![Page(1), Page(2), Page(3)]));

    assert_eq!(
        page_window(i64::MAX, 10),
        vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
    );
    let last = page_window(i64::MAX, i64::MAX);
    assert_eq!(last.last(), Some(&Page(i64::MAX)));
    assert_eq!(Meta::with_window(1, 1, i64::MAX).total_pages, Some(i64::MAX));
}
