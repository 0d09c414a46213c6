#![cfg(target_os = "linux")]

use std::fs;

use ethaddr::{get_hardware_address, Error};

#[test]
fn missing_interface_is_not_found() {
    match get_hardware_address("nonexistent0") {
        Err(Error::InterfaceNotFound { interface, .. }) => assert_eq!(interface, "nonexistent0"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn loopback_matches_sysfs() {
    // Not every sandbox mounts sysfs
    let Ok(expected) = fs::read_to_string("/sys/class/net/lo/address") else {
        return;
    };

    let address = get_hardware_address("lo").unwrap();
    assert_eq!(address.to_string(), expected.trim());
}

#[test]
fn concurrent_lookups_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| get_hardware_address("nonexistent0").is_err()))
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
