//! Device address resolution tests

use berrylink::config::DeviceConfig;
use berrylink::errors::BerryLinkError;
use berrylink::script::buffer::ScriptBuffer;
use berrylink::script::directives::resolve_device_address;

fn config_with(address: Option<&str>) -> DeviceConfig {
    DeviceConfig {
        address: address.map(str::to_string),
        ..DeviceConfig::default()
    }
}

#[test]
fn buffer_directive_beats_configured_default() {
    let buffer = ScriptBuffer::new("#deviceAddress:192.0.2.5\nprint('hi')\n");
    let config = config_with(Some("http://10.0.0.1"));
    let address = resolve_device_address(Some(&buffer), &config).unwrap();
    assert_eq!(address, "192.0.2.5");
}

#[test]
fn configured_default_used_without_directive() {
    let buffer = ScriptBuffer::new("print('hi')\n");
    let config = config_with(Some("http://10.0.0.1"));
    let address = resolve_device_address(Some(&buffer), &config).unwrap();
    assert_eq!(address, "http://10.0.0.1");
}

#[test]
fn no_buffer_falls_back_to_config() {
    let config = config_with(Some("http://10.0.0.1"));
    let address = resolve_device_address(None, &config).unwrap();
    assert_eq!(address, "http://10.0.0.1");
}

#[test]
fn missing_address_everywhere_is_a_config_error() {
    let buffer = ScriptBuffer::new("print('hi')\n");
    let err = resolve_device_address(Some(&buffer), &config_with(None)).unwrap_err();
    assert!(matches!(err, BerryLinkError::Config(_)));

    let err = resolve_device_address(None, &config_with(None)).unwrap_err();
    assert!(matches!(err, BerryLinkError::Config(_)));
}

#[test]
fn empty_configured_address_is_not_a_valid_fallback() {
    let err = resolve_device_address(None, &config_with(Some(""))).unwrap_err();
    assert!(matches!(err, BerryLinkError::Config(_)));
}

#[test]
fn directive_value_is_kept_verbatim() {
    // Permissive on purpose: whitespace in the value is not trimmed
    let buffer = ScriptBuffer::new("#deviceAddress: http://192.0.2.5 \n");
    let config = config_with(Some("http://10.0.0.1"));
    let address = resolve_device_address(Some(&buffer), &config).unwrap();
    assert_eq!(address, " http://192.0.2.5 ");
}

#[test]
fn directive_anywhere_in_the_script_counts() {
    let buffer = ScriptBuffer::new("var a = 1\nvar b = 2\n#deviceAddress:192.0.2.5\n");
    let address = resolve_device_address(Some(&buffer), &config_with(None)).unwrap();
    assert_eq!(address, "192.0.2.5");
}
