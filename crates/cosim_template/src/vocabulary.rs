//! The fixed text the generated documents are assembled from.
//!
//! Fragments that are appended conditionally start with a line break and
//! end without one, so an absent fragment leaves no blank line behind.

/// File banner and library clauses of the wrapper.
pub const HEADER: &str = r#"-------------------------------------------------------------------------------
--
-- {{ENTITY}}
--
-- QEMU co-simulation wrapper generated by cosim-gen from the processing
-- system stub. Regenerate it instead of editing it by hand.
--
-------------------------------------------------------------------------------

library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;
"#;

/// Entity declaration opening and the complete generic schema. Every
/// interface and clock has its generics whether or not the stub exposes it.
pub const GENERICS: &str = r#"
entity {{ENTITY}} is
    generic(
        QEMU_PATH_TO_SOCKET_G    : string  := "{{QEMU_SOCKET_PATH}}";
        QEMU_SYNC_QUANTUM_G      : integer := {{QEMU_SYNC_QUANTUM}};
        --
        FCLK_CLK0_PERIOD_IN_NS_G : integer := {{FCLK_CLK0_PERIOD}};
        FCLK_CLK1_PERIOD_IN_NS_G : integer := {{FCLK_CLK1_PERIOD}};
        FCLK_CLK2_PERIOD_IN_NS_G : integer := {{FCLK_CLK2_PERIOD}};
        FCLK_CLK3_PERIOD_IN_NS_G : integer := {{FCLK_CLK3_PERIOD}};
        --
        M_AXI_GP0_ENABLE_G       : integer := {{M_AXI_GP0_ENABLE}};
        M_AXI_GP1_ENABLE_G       : integer := {{M_AXI_GP1_ENABLE}};
        --
        S_AXI_GP0_ENABLE_G       : integer := {{S_AXI_GP0_ENABLE}};
        S_AXI_GP1_ENABLE_G       : integer := {{S_AXI_GP1_ENABLE}};
        S_AXI_HP0_ENABLE_G       : integer := {{S_AXI_HP0_ENABLE}};
        S_AXI_HP1_ENABLE_G       : integer := {{S_AXI_HP1_ENABLE}};
        S_AXI_HP2_ENABLE_G       : integer := {{S_AXI_HP2_ENABLE}};
        S_AXI_HP3_ENABLE_G       : integer := {{S_AXI_HP3_ENABLE}};
        --
        M_AXI_GP0_ADDR_WIDTH_G   : integer := {{M_AXI_GP0_ADDR_WIDTH}};
        M_AXI_GP0_DATA_WIDTH_G   : integer := {{M_AXI_GP0_DATA_WIDTH}};
        M_AXI_GP0_ID_WIDTH_G     : integer := {{M_AXI_GP0_ID_WIDTH}};
        M_AXI_GP0_AXLEN_WIDTH_G  : integer := {{M_AXI_GP0_AXLEN_WIDTH}};
        M_AXI_GP0_AXLOCK_WIDTH_G : integer := {{M_AXI_GP0_AXLOCK_WIDTH}};
        --
        M_AXI_GP1_ADDR_WIDTH_G   : integer := {{M_AXI_GP1_ADDR_WIDTH}};
        M_AXI_GP1_DATA_WIDTH_G   : integer := {{M_AXI_GP1_DATA_WIDTH}};
        M_AXI_GP1_ID_WIDTH_G     : integer := {{M_AXI_GP1_ID_WIDTH}};
        M_AXI_GP1_AXLEN_WIDTH_G  : integer := {{M_AXI_GP1_AXLEN_WIDTH}};
        M_AXI_GP1_AXLOCK_WIDTH_G : integer := {{M_AXI_GP1_AXLOCK_WIDTH}};
        --
        S_AXI_GP0_ADDR_WIDTH_G   : integer := {{S_AXI_GP0_ADDR_WIDTH}};
        S_AXI_GP0_DATA_WIDTH_G   : integer := {{S_AXI_GP0_DATA_WIDTH}};
        S_AXI_GP0_ID_WIDTH_G     : integer := {{S_AXI_GP0_ID_WIDTH}};
        S_AXI_GP0_AXLEN_WIDTH_G  : integer := {{S_AXI_GP0_AXLEN_WIDTH}};
        S_AXI_GP0_AXLOCK_WIDTH_G : integer := {{S_AXI_GP0_AXLOCK_WIDTH}};
        --
        S_AXI_GP1_ADDR_WIDTH_G   : integer := {{S_AXI_GP1_ADDR_WIDTH}};
        S_AXI_GP1_DATA_WIDTH_G   : integer := {{S_AXI_GP1_DATA_WIDTH}};
        S_AXI_GP1_ID_WIDTH_G     : integer := {{S_AXI_GP1_ID_WIDTH}};
        S_AXI_GP1_AXLEN_WIDTH_G  : integer := {{S_AXI_GP1_AXLEN_WIDTH}};
        S_AXI_GP1_AXLOCK_WIDTH_G : integer := {{S_AXI_GP1_AXLOCK_WIDTH}};
        --
        S_AXI_HP0_ADDR_WIDTH_G   : integer := {{S_AXI_HP0_ADDR_WIDTH}};
        S_AXI_HP0_DATA_WIDTH_G   : integer := {{S_AXI_HP0_DATA_WIDTH}};
        S_AXI_HP0_ID_WIDTH_G     : integer := {{S_AXI_HP0_ID_WIDTH}};
        S_AXI_HP0_AXLEN_WIDTH_G  : integer := {{S_AXI_HP0_AXLEN_WIDTH}};
        S_AXI_HP0_AXLOCK_WIDTH_G : integer := {{S_AXI_HP0_AXLOCK_WIDTH}};
        --
        S_AXI_HP1_ADDR_WIDTH_G   : integer := {{S_AXI_HP1_ADDR_WIDTH}};
        S_AXI_HP1_DATA_WIDTH_G   : integer := {{S_AXI_HP1_DATA_WIDTH}};
        S_AXI_HP1_ID_WIDTH_G     : integer := {{S_AXI_HP1_ID_WIDTH}};
        S_AXI_HP1_AXLEN_WIDTH_G  : integer := {{S_AXI_HP1_AXLEN_WIDTH}};
        S_AXI_HP1_AXLOCK_WIDTH_G : integer := {{S_AXI_HP1_AXLOCK_WIDTH}};
        --
        S_AXI_HP2_ADDR_WIDTH_G   : integer := {{S_AXI_HP2_ADDR_WIDTH}};
        S_AXI_HP2_DATA_WIDTH_G   : integer := {{S_AXI_HP2_DATA_WIDTH}};
        S_AXI_HP2_ID_WIDTH_G     : integer := {{S_AXI_HP2_ID_WIDTH}};
        S_AXI_HP2_AXLEN_WIDTH_G  : integer := {{S_AXI_HP2_AXLEN_WIDTH}};
        S_AXI_HP2_AXLOCK_WIDTH_G : integer := {{S_AXI_HP2_AXLOCK_WIDTH}};
        --
        S_AXI_HP3_ADDR_WIDTH_G   : integer := {{S_AXI_HP3_ADDR_WIDTH}};
        S_AXI_HP3_DATA_WIDTH_G   : integer := {{S_AXI_HP3_DATA_WIDTH}};
        S_AXI_HP3_ID_WIDTH_G     : integer := {{S_AXI_HP3_ID_WIDTH}};
        S_AXI_HP3_AXLEN_WIDTH_G  : integer := {{S_AXI_HP3_AXLEN_WIDTH}};
        S_AXI_HP3_AXLOCK_WIDTH_G : integer := {{S_AXI_HP3_AXLOCK_WIDTH}}
        );
"#;

/// Entity end, architecture declarations and the generic map of the
/// co-simulation core. Ends right after the generic map's closing `)`.
pub const ARCHITECTURE: &str = r#"
end entity {{ENTITY}};

architecture struct of {{ENTITY}} is

    signal rst_s               : std_logic;
    signal m_axi_gp0_aresetn_s : std_logic;
    signal m_axi_gp1_aresetn_s : std_logic;
    signal s_axi_gp0_aresetn_s : std_logic;
    signal s_axi_gp1_aresetn_s : std_logic;
    signal s_axi_hp0_aresetn_s : std_logic;
    signal s_axi_hp1_aresetn_s : std_logic;
    signal s_axi_hp2_aresetn_s : std_logic;
    signal s_axi_hp3_aresetn_s : std_logic;

begin

    zynq7_ps_wrapper_inst : entity work.zynq7_ps_wrapper
        generic map (
            QEMU_PATH_TO_SOCKET_G    => QEMU_PATH_TO_SOCKET_G,
            QEMU_SYNC_QUANTUM_G      => QEMU_SYNC_QUANTUM_G,
            --
            FCLK_CLK0_PERIOD_IN_NS_G => FCLK_CLK0_PERIOD_IN_NS_G,
            FCLK_CLK1_PERIOD_IN_NS_G => FCLK_CLK1_PERIOD_IN_NS_G,
            FCLK_CLK2_PERIOD_IN_NS_G => FCLK_CLK2_PERIOD_IN_NS_G,
            FCLK_CLK3_PERIOD_IN_NS_G => FCLK_CLK3_PERIOD_IN_NS_G,
            --
            M_AXI_GP0_ENABLE_G       => M_AXI_GP0_ENABLE_G,
            M_AXI_GP1_ENABLE_G       => M_AXI_GP1_ENABLE_G,
            --
            S_AXI_GP0_ENABLE_G       => S_AXI_GP0_ENABLE_G,
            S_AXI_GP1_ENABLE_G       => S_AXI_GP1_ENABLE_G,
            --
            S_AXI_HP0_ENABLE_G       => S_AXI_HP0_ENABLE_G,
            S_AXI_HP1_ENABLE_G       => S_AXI_HP1_ENABLE_G,
            S_AXI_HP2_ENABLE_G       => S_AXI_HP2_ENABLE_G,
            S_AXI_HP3_ENABLE_G       => S_AXI_HP3_ENABLE_G,
            --
            M_AXI_GP0_ADDR_WIDTH_G   => M_AXI_GP0_ADDR_WIDTH_G,
            M_AXI_GP0_DATA_WIDTH_G   => M_AXI_GP0_DATA_WIDTH_G,
            M_AXI_GP0_ID_WIDTH_G     => M_AXI_GP0_ID_WIDTH_G,
            M_AXI_GP0_AXLEN_WIDTH_G  => M_AXI_GP0_AXLEN_WIDTH_G,
            M_AXI_GP0_AXLOCK_WIDTH_G => M_AXI_GP0_AXLOCK_WIDTH_G,
            --
            M_AXI_GP1_ADDR_WIDTH_G   => M_AXI_GP1_ADDR_WIDTH_G,
            M_AXI_GP1_DATA_WIDTH_G   => M_AXI_GP1_DATA_WIDTH_G,
            M_AXI_GP1_ID_WIDTH_G     => M_AXI_GP1_ID_WIDTH_G,
            M_AXI_GP1_AXLEN_WIDTH_G  => M_AXI_GP1_AXLEN_WIDTH_G,
            M_AXI_GP1_AXLOCK_WIDTH_G => M_AXI_GP1_AXLOCK_WIDTH_G,
            --
            S_AXI_GP0_ADDR_WIDTH_G   => S_AXI_GP0_ADDR_WIDTH_G,
            S_AXI_GP0_DATA_WIDTH_G   => S_AXI_GP0_DATA_WIDTH_G,
            S_AXI_GP0_ID_WIDTH_G     => S_AXI_GP0_ID_WIDTH_G,
            S_AXI_GP0_AXLEN_WIDTH_G  => S_AXI_GP0_AXLEN_WIDTH_G,
            S_AXI_GP0_AXLOCK_WIDTH_G => S_AXI_GP0_AXLOCK_WIDTH_G,
            --
            S_AXI_GP1_ADDR_WIDTH_G   => S_AXI_GP1_ADDR_WIDTH_G,
            S_AXI_GP1_DATA_WIDTH_G   => S_AXI_GP1_DATA_WIDTH_G,
            S_AXI_GP1_ID_WIDTH_G     => S_AXI_GP1_ID_WIDTH_G,
            S_AXI_GP1_AXLEN_WIDTH_G  => S_AXI_GP1_AXLEN_WIDTH_G,
            S_AXI_GP1_AXLOCK_WIDTH_G => S_AXI_GP1_AXLOCK_WIDTH_G,
            --
            S_AXI_HP0_ADDR_WIDTH_G   => S_AXI_HP0_ADDR_WIDTH_G,
            S_AXI_HP0_DATA_WIDTH_G   => S_AXI_HP0_DATA_WIDTH_G,
            S_AXI_HP0_ID_WIDTH_G     => S_AXI_HP0_ID_WIDTH_G,
            S_AXI_HP0_AXLEN_WIDTH_G  => S_AXI_HP0_AXLEN_WIDTH_G,
            S_AXI_HP0_AXLOCK_WIDTH_G => S_AXI_HP0_AXLOCK_WIDTH_G,
            --
            S_AXI_HP1_ADDR_WIDTH_G   => S_AXI_HP1_ADDR_WIDTH_G,
            S_AXI_HP1_DATA_WIDTH_G   => S_AXI_HP1_DATA_WIDTH_G,
            S_AXI_HP1_ID_WIDTH_G     => S_AXI_HP1_ID_WIDTH_G,
            S_AXI_HP1_AXLEN_WIDTH_G  => S_AXI_HP1_AXLEN_WIDTH_G,
            S_AXI_HP1_AXLOCK_WIDTH_G => S_AXI_HP1_AXLOCK_WIDTH_G,
            --
            S_AXI_HP2_ADDR_WIDTH_G   => S_AXI_HP2_ADDR_WIDTH_G,
            S_AXI_HP2_DATA_WIDTH_G   => S_AXI_HP2_DATA_WIDTH_G,
            S_AXI_HP2_ID_WIDTH_G     => S_AXI_HP2_ID_WIDTH_G,
            S_AXI_HP2_AXLEN_WIDTH_G  => S_AXI_HP2_AXLEN_WIDTH_G,
            S_AXI_HP2_AXLOCK_WIDTH_G => S_AXI_HP2_AXLOCK_WIDTH_G,
            --
            S_AXI_HP3_ADDR_WIDTH_G   => S_AXI_HP3_ADDR_WIDTH_G,
            S_AXI_HP3_DATA_WIDTH_G   => S_AXI_HP3_DATA_WIDTH_G,
            S_AXI_HP3_ID_WIDTH_G     => S_AXI_HP3_ID_WIDTH_G,
            S_AXI_HP3_AXLEN_WIDTH_G  => S_AXI_HP3_AXLEN_WIDTH_G,
            S_AXI_HP3_AXLOCK_WIDTH_G => S_AXI_HP3_AXLOCK_WIDTH_G)"#;

/// The port map around the connection fragments.
pub const PORT_MAP: &str = r#"
        port map ({{CONNECTIONS}}
            --__
            --
            rst_o             => rst_s);
"#;

/// Connection of one fabric clock.
pub const CLOCK_CONNECTION: &str = r#"
            --__CONNECT_FCLK_CLK{{INDEX}}__
            fclk_clk{{INDEX}}         => FCLK_CLK{{INDEX}},"#;

/// Reset assignment of one fabric clock.
pub const CLOCK_RESET: &str = r#"
    FCLK_RESET{{INDEX}}_N <= not rst_s;"#;

/// Connection of one AXI interface. `{{port}}` is the lower-case interface
/// name, `{{PORT}}` the upper-case one.
pub const AXI_CONNECTION: &str = r#"
            --__CONNECT_{{PORT}}__
            {{port}}_aclk    => {{PORT}}_ACLK,
            {{port}}_aresetn => {{port}}_aresetn_s,
            {{port}}_awvalid => {{PORT}}_AWVALID,
            {{port}}_awready => {{PORT}}_AWREADY,
            {{port}}_awaddr  => {{PORT}}_AWADDR,
            {{port}}_awprot  => {{PORT}}_AWPROT,
            {{port}}_awqos   => {{PORT}}_AWQOS,
            {{port}}_awcache => {{PORT}}_AWCACHE,
            {{port}}_awburst => {{PORT}}_AWBURST,
            {{port}}_awsize  => {{PORT}}_AWSIZE,
            {{port}}_awlen   => {{PORT}}_AWLEN,
            {{port}}_awid    => {{PORT}}_AWID,
            {{port}}_awlock  => {{PORT}}_AWLOCK,
            {{port}}_wid     => {{PORT}}_WID,
            {{port}}_wvalid  => {{PORT}}_WVALID,
            {{port}}_wready  => {{PORT}}_WREADY,
            {{port}}_wdata   => {{PORT}}_WDATA,
            {{port}}_wstrb   => {{PORT}}_WSTRB,
            {{port}}_wlast   => {{PORT}}_WLAST,
            {{port}}_bvalid  => {{PORT}}_BVALID,
            {{port}}_bready  => {{PORT}}_BREADY,
            {{port}}_bresp   => {{PORT}}_BRESP,
            {{port}}_bid     => {{PORT}}_BID,
            {{port}}_arvalid => {{PORT}}_ARVALID,
            {{port}}_arready => {{PORT}}_ARREADY,
            {{port}}_araddr  => {{PORT}}_ARADDR,
            {{port}}_arprot  => {{PORT}}_ARPROT,
            {{port}}_arqos   => {{PORT}}_ARQOS,
            {{port}}_arcache => {{PORT}}_ARCACHE,
            {{port}}_arburst => {{PORT}}_ARBURST,
            {{port}}_arsize  => {{PORT}}_ARSIZE,
            {{port}}_arlen   => {{PORT}}_ARLEN,
            {{port}}_arid    => {{PORT}}_ARID,
            {{port}}_arlock  => {{PORT}}_ARLOCK,
            {{port}}_rvalid  => {{PORT}}_RVALID,
            {{port}}_rready  => {{PORT}}_RREADY,
            {{port}}_rdata   => {{PORT}}_RDATA,
            {{port}}_rresp   => {{PORT}}_RRESP,
            {{port}}_rid     => {{PORT}}_RID,
            {{port}}_rlast   => {{PORT}}_RLAST,"#;

/// Connection of the fabric-to-PS interrupt vector, widened to 16 lines.
pub const IRQ_CONNECTION: &str = r#"
            --__CONNECT_IRQ_F2P__
            irq_f2p           => std_logic_vector(resize(unsigned(IRQ_F2P), 16)),"#;

/// Clock resets, AXI reset assignments and the architecture end.
pub const ARCHITECTURE_TAIL: &str = r#"{{CLOCK_RESETS}}
    --
    m_axi_gp0_aresetn_s <= not rst_s;
    m_axi_gp1_aresetn_s <= not rst_s;
    --
    s_axi_gp0_aresetn_s <= not rst_s;
    s_axi_gp1_aresetn_s <= not rst_s;
    --
    s_axi_hp0_aresetn_s <= not rst_s;
    s_axi_hp1_aresetn_s <= not rst_s;
    s_axi_hp2_aresetn_s <= not rst_s;
    s_axi_hp3_aresetn_s <= not rst_s;
    --

    -- Other inputs and outputs are left unconnected because they are not
    -- needed for this design and will therefore stay in an 'U' or 'X' state in
    -- simulation. They should not be connected to anything meaningful in the
    -- top design.

end architecture struct;
"#;

/// The QuestaSim entry script.
pub const TOP_SCRIPT: &str = r#"# Main script for QuestaSim (auto-generated)
do {{TOP}}_compile.do
do {{COMPILE_SCRIPT}}
do {{TOP}}{{ELABORATE_SUFFIX}}
vsim -lib {{LIBRARY}} {{TOP}}_opt
"#;

/// The co-simulation compile script. `{{CXX_DEFINES}}` is either empty or a
/// sequence of ` -D<flag>=<value>` items.
pub const COMPILE_SCRIPT: &str = r#"# Script to compile the CoSimulation files (auto-generated)

vlib questa_lib/work
vlib questa_lib/msim

vlib questa_lib/msim/{{LIBRARY}}

vmap {{LIBRARY}} questa_lib/msim/{{LIBRARY}}

# Zynq System Wrapper
sccom -work {{LIBRARY}} --std=c++11 -g -I./libsystemctlm-soc/libremote-port/ -I./libsystemctlm-soc/ ./libsystemctlm-soc/soc/xilinx/zynq/xilinx-zynq.cc

# Compile C files (not SystemC) for libremote-port
sccom -work {{LIBRARY}} -x c -fPIC -g ./libsystemctlm-soc/libremote-port/safeio.c
sccom -work {{LIBRARY}} -x c -fPIC -g ./libsystemctlm-soc/libremote-port/remote-port-proto.c
sccom -work {{LIBRARY}} -x c -fPIC -g ./libsystemctlm-soc/libremote-port/remote-port-sk.c

# Lib Remote Port (RP) SystemC files
sccom -work {{LIBRARY}} -g -I./libsystemctlm-soc/libremote-port/ -I./libsystemctlm-soc/ ./libsystemctlm-soc/libremote-port/remote-port-tlm.cc
sccom -work {{LIBRARY}} -g -I./libsystemctlm-soc/libremote-port/ -I./libsystemctlm-soc/ ./libsystemctlm-soc/libremote-port/remote-port-tlm-memory-master.cc
sccom -work {{LIBRARY}} -g -I./libsystemctlm-soc/libremote-port/ -I./libsystemctlm-soc/ ./libsystemctlm-soc/libremote-port/remote-port-tlm-memory-slave.cc
sccom -work {{LIBRARY}} -g -I./libsystemctlm-soc/libremote-port/ -I./libsystemctlm-soc/ ./libsystemctlm-soc/libremote-port/remote-port-tlm-wires.cc

# The main Zynq SystemC-TLM CoSimulation entity
sccom -work {{LIBRARY}}{{CXX_DEFINES}} -g -I./libsystemctlm-soc/libremote-port/ -I./libsystemctlm-soc/ -I./libsystemctlm-soc/soc/xilinx/zynq/ -Isrc_sc -I. -I./libsystemctlm-soc/tlm-bridges/ src_sc/zynq7_ps.cc

# Compilation of the VHDL wrapper around the SystemC entity
vcom -work {{LIBRARY}} src_vhdl/zynq7_ps_wrapper.vhd

# Link (systemc.so)
sccom -link -work {{LIBRARY}}

# Compile VHDL BD wrapper (auto-generated)
vcom -work {{LIBRARY}} -2008 {{WRAPPER_FILE}}

# Simulate (requires QEMU to be launched, twice, once for the optimization and
# then again for the simulation)
#
# petalinux-boot --qemu --kernel --qemu-args "-hw-dtb ./system.dtb -machine-path ./qemu-tmp -icount 1 -sync-quantum {{QEMU_SYNC_QUANTUM}}"
#
# Time quantum and machine path should be the same between simulation and QEMU
# emulation (generics of the wrapper, can be changed in the testbench)
"#;
