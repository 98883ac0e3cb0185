/// Calculates the `method` label from the HTTP method.
pub fn method_label<M: AsRef<str>>(method: M) -> String {
    method.as_ref().to_uppercase()
}
