use cfg_aliases::cfg_aliases;

fn main() {
    cfg_aliases! {
        bosch_backend: { all(feature = "bosch", not(feature = "stm")) },
        stm_backend: { all(feature = "stm", not(feature = "bosch")) },
        no_backend: { not(any(feature = "bosch", feature = "stm")) },
        both_backends: { all(feature = "bosch", feature = "stm") },
    }
}
