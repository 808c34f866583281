//! Start screen.

pub fn render() -> Vec<String> {
    vec![
        String::new(),
        "Start your lunch order.".to_string(),
        String::new(),
        "  [start] Start Order".to_string(),
    ]
}
