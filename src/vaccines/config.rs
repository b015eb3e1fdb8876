#[derive(Clone, Debug, Default)]
pub struct VaccinesConfig {}
