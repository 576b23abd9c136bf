//! 用户目录示例程序

use clap::Parser;
use locator_abstractions::ServiceRegistry;
use locator_composition::{LoggingConfig, RegistryBuilder, SettingsLoader};
use std::path::PathBuf;
use tracing::info;
use user_directory::{DemoSettings, FakeApiModule, HttpApiModule, UserViewModel, UsersModule};

#[derive(Parser, Debug)]
#[command(name = "user-directory")]
#[command(about = "通过服务注册表组装并列出用户")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "config/user-directory.toml")]
    config: PathBuf,

    /// 日志级别，覆盖配置文件
    #[arg(short, long)]
    log_level: Option<String>,

    /// 使用内置的测试替身代替 HTTP 接口
    #[arg(long)]
    fake: bool,

    /// 使用开发环境日志配置（显示线程和源码位置）
    #[arg(long)]
    dev: bool,

    /// 打印生效的配置后退出
    #[arg(long)]
    print_settings: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut loader = SettingsLoader::new().add_file(&args.config, false);
    if let Some(level) = &args.log_level {
        loader = loader.set_override("logging.level", level.clone());
    }
    let settings: DemoSettings = loader.load()?;

    if args.print_settings {
        print!("{}", toml::to_string_pretty(&settings)?);
        return Ok(());
    }

    let mut builder = RegistryBuilder::new().with_settings(&settings.locator)?;
    if args.dev {
        builder = builder.with_logging(LoggingConfig::development());
    }
    let builder = if args.fake {
        builder.add_module(FakeApiModule::default())
    } else {
        builder.add_module(HttpApiModule::new(settings.api.clone()))
    };
    let registry = builder.add_module(UsersModule).require::<UserViewModel>().build()?;

    info!(fake = args.fake, "服务注册表就绪");

    let view_model = registry.resolve::<UserViewModel>()?;
    let users = view_model.load_users().await?;

    for user in &users {
        println!("{user}");
    }
    info!(count = users.len(), "完成");

    Ok(())
}
