use mission_computer::{config, query_load, query_static_info};

fn setup_logging() {
    unsafe {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", config::DEFAULT_LOG_LEVEL);
        }
    }
    env_logger::init();
}

fn main() {
    setup_logging();

    // 조회 실패는 각 probe가 출력하고 삼키므로 종료 코드는 항상 0
    println!("{}", config::STATIC_INFO_HEADER);
    let _ = query_static_info();

    println!("{}", config::LOAD_HEADER);
    let _ = query_load();
}
