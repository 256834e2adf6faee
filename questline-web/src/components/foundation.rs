pub use yew::function_component;
pub use yew::prelude::{AttrValue, Children, Classes, Html, Properties, html};

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[cfg(test)]
mod tests {
    use super::class_list;
    use yew::Classes;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mb-4 bg-green-50");
        let rendered = class_list(&["rounded-lg", "border"], &extra).to_string();
        assert!(rendered.starts_with("rounded-lg border"));
        assert!(rendered.contains("bg-green-50"));
    }

    #[test]
    fn class_list_without_extra_keeps_base() {
        let rendered = class_list(&["text-sm"], &Classes::new()).to_string();
        assert_eq!(rendered, "text-sm");
    }
}
