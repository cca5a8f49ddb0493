fn main() {
    multiversx_sc_meta_lib::cli_main::<disbursement_engine::AbiProvider>();
}
