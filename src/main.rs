fn main() {
    color_path::game::run();
}
