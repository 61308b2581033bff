// CLASSIFICATION: COMMUNITY
// Filename: syscontrol.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

use clap::{Parser, Subcommand, ValueEnum};
use syscontrol::catalogue::{Hardware, Kernel, Machdep, MachdepCpu, Networking, User, VirtualMemory};
use syscontrol::catalogue::{Inet, Inet6, Inet6Icmp, Inet6Ip, InetIcmp, InetIp, InetUdp};
use syscontrol::{
    access, resolve, FieldPaths, PathPreference, ResolvedPath, Root, SysctlResult, SystemRegistry,
};

#[derive(Parser)]
#[command(name = "syscontrol", about = "Inspect kernel registry values", version = "0.1")]
struct Cli {
    /// Override the configured path preference.
    #[arg(long, global = true)]
    prefer: Option<PathPreference>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalogue fields with their dotted names and MIBs.
    Names,
    /// Print the common host values.
    Show,
    /// Read one value by dotted name.
    Get {
        name: String,
        #[arg(long, value_enum, default_value_t = Kind::Text)]
        kind: Kind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    #[value(name = "string")]
    Text,
    Int,
    Long,
    Bool,
}

fn print_paths(paths: FieldPaths) {
    let name = paths.symbolic.unwrap_or_else(|| "-".to_owned());
    let mib = paths
        .numeric
        .map(|mib| ResolvedPath::Numeric(mib).to_string())
        .unwrap_or_else(|| "-".to_owned());
    println!("{name:<32} {mib}");
}

fn names(sysctl: &syscontrol::SystemControl) {
    let hw = sysctl.child(Root::hardware);
    print_paths(hw.paths(Hardware::machine));
    print_paths(hw.paths(Hardware::model));
    print_paths(hw.paths(Hardware::cpu_count));
    print_paths(hw.paths(Hardware::physical_cpus));
    print_paths(hw.paths(Hardware::page_size));
    print_paths(hw.paths(Hardware::memory_size));

    let kern = sysctl.child(Root::kernel);
    print_paths(kern.paths(Kernel::os_type));
    print_paths(kern.paths(Kernel::os_release));
    print_paths(kern.paths(Kernel::os_revision));
    print_paths(kern.paths(Kernel::os_version));
    print_paths(kern.paths(Kernel::version));
    print_paths(kern.paths(Kernel::host_id));
    print_paths(kern.paths(Kernel::hostname));
    print_paths(kern.paths(Kernel::boot_time));
    print_paths(kern.paths(Kernel::clock_rate));
    print_paths(kern.paths(Kernel::single_user));
    print_paths(kern.paths(Kernel::job_control));
    print_paths(kern.paths(Kernel::max_files));
    print_paths(kern.paths(Kernel::max_files_per_process));
    print_paths(kern.paths(Kernel::max_processes));
    print_paths(kern.paths(Kernel::max_processes_per_user));
    print_paths(kern.paths(Kernel::max_vnodes));
    print_paths(kern.child(Kernel::hypervisor).paths(|hv| hv.supported()));

    let net = sysctl.child(Root::networking);
    let inet = net.child(Networking::inet);
    let ip = inet.child(Inet::ip);
    print_paths(ip.paths(InetIp::forwarding));
    print_paths(ip.paths(InetIp::send_redirects));
    print_paths(ip.paths(InetIp::default_ttl));
    let icmp = inet.child(Inet::icmp);
    print_paths(icmp.paths(InetIcmp::mask_reply));
    print_paths(icmp.paths(InetIcmp::broadcast_echo));
    print_paths(inet.child(Inet::udp).paths(InetUdp::checksum));
    let inet6 = net.child(Networking::inet6);
    let ip6 = inet6.child(Inet6::ip6);
    print_paths(ip6.paths(Inet6Ip::forwarding));
    print_paths(ip6.paths(Inet6Ip::send_redirects));
    let icmp6 = inet6.child(Inet6::icmp6);
    print_paths(icmp6.paths(Inet6Icmp::accept_redirects));
    print_paths(icmp6.paths(Inet6Icmp::redirect_timeout));

    print_paths(sysctl.child(Root::user).paths(User::cs_path));
    let vm = sysctl.child(Root::virtual_memory);
    print_paths(vm.paths(VirtualMemory::load_average));
    print_paths(vm.paths(VirtualMemory::swap_enabled));
    let cpu = sysctl.child(Root::machine_dependent).child(Machdep::cpu);
    print_paths(cpu.paths(MachdepCpu::brand_string));
}

fn show(sysctl: &syscontrol::SystemControl) -> SysctlResult<()> {
    let kern = sysctl.child(Root::kernel);
    let hw = sysctl.child(Root::hardware);
    println!("hostname:  {}", kern.get(Kernel::hostname)?);
    println!(
        "system:    {} {}",
        kern.get(Kernel::os_type)?,
        kern.get(Kernel::os_release)?
    );
    println!("machine:   {}", hw.get(Hardware::machine)?);
    println!("cpus:      {}", hw.get(Hardware::cpu_count)?);
    println!("page size: {}", hw.get(Hardware::page_size)?);
    let load = sysctl.child(Root::virtual_memory).get(VirtualMemory::load_average)?;
    println!("load:      {:.2} {:.2} {:.2}", load.one, load.five, load.fifteen);
    let booted = kern.get(Kernel::boot_time)?;
    if let Ok(uptime) = booted.elapsed() {
        println!("uptime:    {}s", uptime.as_secs());
    }
    Ok(())
}

fn get(sysctl: &syscontrol::SystemControl, name: String, kind: Kind) -> SysctlResult<()> {
    let key = resolve::lookup_key(
        sysctl.registry(),
        ResolvedPath::Symbolic(name),
        sysctl.config().translate_names,
    )?;
    match kind {
        Kind::Text => println!("{}", access::read::<String, _>(&SystemRegistry, &key)?),
        Kind::Int => println!("{}", access::read::<i32, _>(&SystemRegistry, &key)?),
        Kind::Long => println!("{}", access::read::<i64, _>(&SystemRegistry, &key)?),
        Kind::Bool => println!("{}", access::read::<bool, _>(&SystemRegistry, &key)?),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut sysctl = syscontrol::system();
    if let Some(prefer) = cli.prefer {
        let mut config = sysctl.config();
        config.prefer = prefer;
        sysctl = sysctl.with_config(config);
    }
    let result = match cli.command {
        Commands::Names => {
            names(&sysctl);
            Ok(())
        }
        Commands::Show => show(&sysctl),
        Commands::Get { name, kind } => get(&sysctl, name, kind),
    };
    if let Err(e) = result {
        eprintln!("syscontrol error: {e}");
        std::process::exit(1);
    }
}
