//! Concurrent discovery
//!
//! The first callers of `all()` race to publish the instance list; every
//! caller must observe the same list.

use crate::common::*;
use calends::{get_all_of, EnumBase, Enumeration, EnumerationType};

#[derive(Debug)]
pub struct Planet {
    base: EnumBase,
}

pub static MERCURY: Planet = Planet {
    base: EnumBase::named(1, "Mercury"),
};
pub static VENUS: Planet = Planet {
    base: EnumBase::named(2, "Venus"),
};
pub static EARTH: Planet = Planet {
    base: EnumBase::named(3, "Earth"),
};

calends::enumeration!(Planet, base, [MERCURY, VENUS, EARTH]);

#[derive(Debug)]
pub struct Moon {
    base: EnumBase,
}

pub static LUNA: Moon = Moon {
    base: EnumBase::named(1, "Luna"),
};

calends::enumeration!(Moon, base, [LUNA]);

#[test]
fn racing_first_calls_publish_one_list() {
    let addresses = run_concurrently(16, |_| Planet::all().as_ptr() as usize);
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(Planet::all().len(), 3);
}

#[test]
fn racing_erased_calls_agree() {
    let results = run_concurrently(16, |thread_id| {
        let all = get_all_of(Some(EnumerationType::of::<Moon>())).unwrap();
        (thread_id, all.len(), all[0].name().to_string())
    });
    for (_, len, name) in results {
        assert_eq!(len, 1);
        assert_eq!(name, "Luna");
    }
}

#[test]
fn concurrent_lookups() {
    let found = run_concurrently(8, |thread_id| {
        let value = (thread_id % 3) as i32 + 1;
        Planet::from_value(value).unwrap().value() == value
            && Planet::from_name("EARTH").unwrap().value() == 3
    });
    assert!(found.into_iter().all(|ok| ok));
}
