fn main() {
    #[cfg(windows)]
    {
        if std::path::Path::new("assets/heartnote.ico").exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/heartnote.ico");
            if let Err(e) = res.compile() {
                println!("cargo:warning=failed to embed icon: {}", e);
            }
        } else {
            println!("cargo:warning=heartnote.ico not found, skipping icon embedding");
        }
    }
}
