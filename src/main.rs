use anyhow::Result;
use directory_sort::{logger, App, Config};

fn main() {
    if let Err(e) = run() {
        // 任何读取或解析失败都不输出部分报告
        println!("Failed to read directory file: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // 加载配置，命令行第一个参数可覆盖目录文件路径
    let mut config = Config::from_env()?;
    if let Some(path) = std::env::args().nth(1) {
        config = config.with_directory_file(path);
    }

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let mut app = App::initialize(config)?;
    app.run(&mut std::io::stdout().lock())?;

    Ok(())
}
